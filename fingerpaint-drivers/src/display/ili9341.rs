//! ILI9341 TFT controller
//!
//! 240x320 panel, 16 bits per pixel. Drawing is always: set the address
//! window, open a memory write, stream RGB565 words. The controller fills
//! the window left to right, top to bottom, wrapping inside it.

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use embedded_hal::delay::DelayNs;
use fingerpaint_core::config::{DisplayTiming, PanelGeometry};
use fingerpaint_core::Fault;
use fingerpaint_hal::{OutputPin, SpiBus};

use super::interface::SpiInterface;

/// ILI9341 command opcodes
pub mod cmd {
    /// Column address set
    pub const CASET: u8 = 0x2A;
    /// Page (row) address set
    pub const PASET: u8 = 0x2B;
    /// Memory write
    pub const RAMWR: u8 = 0x2C;
    /// Sleep out
    pub const SLPOUT: u8 = 0x11;
    /// Display on
    pub const DISPON: u8 = 0x29;
    /// Pixel format set
    pub const PIXFMT: u8 = 0x3A;
    /// Memory access control
    pub const MADCTL: u8 = 0x36;
}

/// PIXFMT parameter: 16 bpp on both the RGB and MCU interfaces
const PIXEL_FORMAT_16BPP: u8 = 0x55;

/// MADCTL parameter: portrait, column order mirrored, BGR panel
const MADCTL_PORTRAIT_BGR: u8 = 0x48;

/// A validated addressing window, start corner <= end corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    /// Left column, inclusive
    pub x0: u16,
    /// Top row, inclusive
    pub y0: u16,
    /// Right column, inclusive
    pub x1: u16,
    /// Bottom row, inclusive
    pub y1: u16,
}

impl Window {
    /// Validate and normalize a window request
    ///
    /// Coordinates equal to the panel size are accepted. Each pair is
    /// swapped so the start is not after the end.
    pub fn new(panel: PanelGeometry, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<Self, Fault> {
        if !panel.contains(x0, y0) || !panel.contains(x1, y1) {
            return Err(Fault::WindowOutOfBounds {
                x0: x0.into(),
                y0: y0.into(),
                x1: x1.into(),
                y1: y1.into(),
            });
        }

        Ok(Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        })
    }
}

/// ILI9341 protocol driver
pub struct Ili9341<SPI, DC, D> {
    iface: SpiInterface<SPI, DC, D>,
    panel: PanelGeometry,
    timing: DisplayTiming,
}

impl<SPI, DC, D> Ili9341<SPI, DC, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    D: DelayNs,
{
    /// Wrap an interface; the controller is untouched until [`init`](Self::init)
    pub fn new(iface: SpiInterface<SPI, DC, D>, panel: PanelGeometry, timing: DisplayTiming) -> Self {
        Self {
            iface,
            panel,
            timing,
        }
    }

    /// Hardware reset followed by the power-up command sequence
    pub fn init<RST: OutputPin>(&mut self, rst: &mut RST) -> Result<(), Fault> {
        rst.set_high();
        rst.set_low();
        self.iface.delay_ms(self.timing.reset_pulse_ms);
        rst.set_high();
        self.iface.delay_ms(self.timing.reset_settle_ms);

        self.iface.write_command(cmd::SLPOUT)?;
        self.iface.delay_ms(self.timing.sleep_out_ms);

        self.iface.write_command(cmd::DISPON)?;

        self.iface.write_command(cmd::PIXFMT)?;
        self.iface.write_data(PIXEL_FORMAT_16BPP)?;

        self.iface.write_command(cmd::MADCTL)?;
        self.iface.write_data(MADCTL_PORTRAIT_BGR)?;

        self.iface.delay_ms(self.timing.init_settle_ms);
        Ok(())
    }

    /// Set the addressing window for the next pixel stream
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<Window, Fault> {
        let window = Window::new(self.panel, x0, y0, x1, y1)?;

        self.iface.write_command(cmd::CASET)?;
        self.write_range(window.x0, window.x1)?;
        self.iface.write_command(cmd::PASET)?;
        self.write_range(window.y0, window.y1)?;

        Ok(window)
    }

    /// Open frame memory for writing at the window's start corner
    pub fn begin_pixel_stream(&mut self) -> Result<(), Fault> {
        self.iface.write_command(cmd::RAMWR)
    }

    /// Stream `count` pixels of one color
    pub fn write_pixels(&mut self, color: Rgb565, count: u32) -> Result<(), Fault> {
        self.iface.write_repeated(color.into_storage(), count)
    }

    /// Stream pre-encoded big-endian RGB565 words
    pub fn write_pixel_bytes(&mut self, bytes: &[u8]) -> Result<(), Fault> {
        self.iface.write_data_bytes(bytes)
    }

    fn write_range(&mut self, start: u16, end: u16) -> Result<(), Fault> {
        let [start_hi, start_lo] = start.to_be_bytes();
        let [end_hi, end_lo] = end.to_be_bytes();
        for byte in [start_hi, start_lo, end_hi, end_lo] {
            self.iface.write_data(byte)?;
        }
        Ok(())
    }
}
