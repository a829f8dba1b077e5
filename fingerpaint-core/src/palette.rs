//! Pen palette
//!
//! Six color boxes across the top band of the panel, left to right.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

use crate::config::BOX_SIZE;

/// Selectable pen colors, in palette order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PenColor {
    #[default]
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

/// Color of the border marking the selected pen
pub const HIGHLIGHT: Rgb565 = Rgb565::WHITE;

impl PenColor {
    /// All pens, left to right
    pub const ALL: [PenColor; 6] = [
        PenColor::Red,
        PenColor::Yellow,
        PenColor::Green,
        PenColor::Cyan,
        PenColor::Blue,
        PenColor::Magenta,
    ];

    /// RGB565 ink value
    pub fn color(self) -> Rgb565 {
        match self {
            PenColor::Red => Rgb565::RED,
            PenColor::Yellow => Rgb565::YELLOW,
            PenColor::Green => Rgb565::GREEN,
            PenColor::Cyan => Rgb565::CYAN,
            PenColor::Blue => Rgb565::BLUE,
            PenColor::Magenta => Rgb565::MAGENTA,
        }
    }

    /// Left edge of this pen's palette box
    pub fn box_x(self) -> u16 {
        self as u16 * BOX_SIZE
    }

    /// Pen whose box contains column `x`
    ///
    /// Columns past the last box belong to the last box.
    pub fn at(x: u16) -> Self {
        match x / BOX_SIZE {
            0 => PenColor::Red,
            1 => PenColor::Yellow,
            2 => PenColor::Green,
            3 => PenColor::Cyan,
            4 => PenColor::Blue,
            _ => PenColor::Magenta,
        }
    }
}
