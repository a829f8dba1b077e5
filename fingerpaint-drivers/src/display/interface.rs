//! Serial display channel
//!
//! The controller samples the D/C line with the last bit of each byte:
//! low selects the command register, high routes bytes to the current
//! command's parameters or to frame memory.

use embedded_hal::delay::DelayNs;
use fingerpaint_core::config::DisplayTiming;
use fingerpaint_core::Fault;
use fingerpaint_hal::{OutputPin, SpiBus};

/// Pixels staged per SPI write when streaming a solid color
const CHUNK_PIXELS: usize = 32;

/// 4-wire SPI link to the panel
pub struct SpiInterface<SPI, DC, D> {
    spi: SPI,
    dc: DC,
    delay: D,
    guard_ms: u32,
}

impl<SPI, DC, D> SpiInterface<SPI, DC, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    D: DelayNs,
{
    /// Create the interface
    pub fn new(spi: SPI, dc: DC, delay: D, timing: &DisplayTiming) -> Self {
        Self {
            spi,
            dc,
            delay,
            guard_ms: timing.command_guard_ms,
        }
    }

    /// Send one command byte, with the guard delay on both sides
    pub fn write_command(&mut self, command: u8) -> Result<(), Fault> {
        self.delay.delay_ms(self.guard_ms);
        self.dc.set_low();
        self.spi.write(&[command]).map_err(|_| Fault::DisplayBus)?;
        self.delay.delay_ms(self.guard_ms);
        Ok(())
    }

    /// Send one parameter byte
    pub fn write_data(&mut self, byte: u8) -> Result<(), Fault> {
        self.write_data_bytes(&[byte])
    }

    /// Send parameter or pixel bytes
    pub fn write_data_bytes(&mut self, bytes: &[u8]) -> Result<(), Fault> {
        self.dc.set_high();
        self.spi.write(bytes).map_err(|_| Fault::DisplayBus)
    }

    /// Send `count` copies of a 16-bit word, high byte first
    pub fn write_repeated(&mut self, word: u16, count: u32) -> Result<(), Fault> {
        let mut chunk = [0u8; CHUNK_PIXELS * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair.copy_from_slice(&word.to_be_bytes());
        }

        let mut remaining = count as usize;
        while remaining > 0 {
            let n = remaining.min(CHUNK_PIXELS);
            self.write_data_bytes(&chunk[..n * 2])?;
            remaining -= n;
        }
        Ok(())
    }

    /// Block for `ms` milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
