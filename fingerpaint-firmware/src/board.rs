//! Board wiring (Raspberry Pi Pico + 2.8" ILI9341/FT6206 breakout)
//!
//! | Signal      | Pin  | Notes                        |
//! |-------------|------|------------------------------|
//! | LCD SCK     | GP18 | SPI0                         |
//! | LCD MOSI    | GP19 | SPI0                         |
//! | LCD MISO    | GP16 | SPI0, unused by the driver   |
//! | LCD CS      | GP17 | held low, only device on bus |
//! | LCD D/C     | GP20 |                              |
//! | LCD RST     | GP21 | active low                   |
//! | CTP SDA     | GP4  | I2C0                         |
//! | CTP SCL     | GP5  | I2C0                         |
//! | CTP IRQ     | GP6  | pull-up, falls on touch      |

use embassy_rp::peripherals::{I2C0, SPI0};
use embassy_time::Delay;

use fingerpaint_core::Painter;
use fingerpaint_drivers::display::{MonoFontGlyphs, Renderer};
use fingerpaint_drivers::touch::Ft6206;
use fingerpaint_hal_rp2040::gpio::RpOutput;
use fingerpaint_hal_rp2040::i2c::RpI2c;
use fingerpaint_hal_rp2040::spi::RpSpi;

/// Canvas backed by the ILI9341 on SPI0
pub type Display = Renderer<RpSpi<'static, SPI0>, RpOutput<'static>, Delay, MonoFontGlyphs>;

/// FT6206 on I2C0
pub type Touch = Ft6206<RpI2c<'static, I2C0>>;

/// The application as wired on this board
pub type App = Painter<Touch, Display, Delay>;
