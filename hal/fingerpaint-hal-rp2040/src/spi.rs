//! SPI master for RP2040
//!
//! Drives the display controller. Only the transmit path is used.

use embassy_rp::spi::{self, Blocking, Instance, Spi};
use fingerpaint_hal::spi::{Phase, Polarity, SpiConfig};

/// Blocking SPI master implementing [`fingerpaint_hal::SpiBus`]
pub struct RpSpi<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
}

impl<'d, T: Instance> RpSpi<'d, T> {
    /// Wrap an already-configured blocking SPI peripheral
    pub fn new(spi: Spi<'d, T, Blocking>) -> Self {
        Self { spi }
    }
}

impl<'d, T: Instance> fingerpaint_hal::SpiBus for RpSpi<'d, T> {
    type Error = spi::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::spi::SpiBus::write(&mut self.spi, data)?;
        // Wait for the shift register to drain before the caller flips DC
        embedded_hal::spi::SpiBus::flush(&mut self.spi)
    }
}

/// Translate a board-agnostic SPI config into an embassy-rp config
pub fn embassy_config(config: &SpiConfig) -> spi::Config {
    let mut out = spi::Config::default();
    out.frequency = config.frequency;
    out.polarity = match config.polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    out.phase = match config.phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    out
}
