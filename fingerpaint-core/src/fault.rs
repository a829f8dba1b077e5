//! Unrecoverable faults
//!
//! Every layer reports failure with [`Fault`]. None of these are retried:
//! the firmware logs the fault and halts.

use core::fmt;

/// A condition the firmware cannot recover from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// An addressing window fell outside the panel
    ///
    /// Corners are reported as requested.
    WindowOutOfBounds { x0: i32, y0: i32, x1: i32, y1: i32 },
    /// The touch controller did not complete an I2C transfer
    TouchBus,
    /// The display did not accept an SPI write
    DisplayBus,
    /// The touch controller answered with an unexpected panel id
    UnknownTouchPanel { found: u8 },
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::WindowOutOfBounds { x0, y0, x1, y1 } => {
                write!(f, "window ({x0},{y0})-({x1},{y1}) out of bounds")
            }
            Fault::TouchBus => f.write_str("touch controller bus error"),
            Fault::DisplayBus => f.write_str("display bus error"),
            Fault::UnknownTouchPanel { found } => {
                write!(f, "unknown touch panel id {found:#04x}")
            }
        }
    }
}
