//! Glyph bitmaps
//!
//! The renderer draws text from fixed 8x14 cells: one byte per row,
//! least significant bit leftmost. [`MonoFontGlyphs`] produces those
//! cells by rasterizing an `embedded-graphics` mono font.

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::FONT_7X14;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use fingerpaint_core::config::{FONT_HEIGHT, FONT_WIDTH};

/// One glyph cell, a byte per row, bit `n` is column `n`
pub type GlyphRows = [u8; FONT_HEIGHT as usize];

/// Character-to-bitmap lookup
pub trait GlyphSource {
    /// Bitmap for `ch`; characters without a glyph render as the font's
    /// replacement glyph or blank
    fn glyph(&self, ch: char) -> GlyphRows;
}

/// Glyphs rasterized from a mono font no larger than the cell
pub struct MonoFontGlyphs {
    font: &'static MonoFont<'static>,
}

impl MonoFontGlyphs {
    /// Use `font`; glyphs wider or taller than the cell are clipped
    pub const fn new(font: &'static MonoFont<'static>) -> Self {
        Self { font }
    }
}

impl Default for MonoFontGlyphs {
    fn default() -> Self {
        Self::new(&FONT_7X14)
    }
}

impl GlyphSource for MonoFontGlyphs {
    fn glyph(&self, ch: char) -> GlyphRows {
        let mut cell = GlyphCell::default();
        let mut utf8 = [0u8; 4];
        let style = MonoTextStyle::new(self.font, BinaryColor::On);
        let text = Text::with_baseline(ch.encode_utf8(&mut utf8), Point::zero(), style, Baseline::Top);
        let _ = text.draw(&mut cell);
        cell.rows
    }
}

/// Draw target covering exactly one glyph cell
#[derive(Default)]
struct GlyphCell {
    rows: GlyphRows,
}

impl OriginDimensions for GlyphCell {
    fn size(&self) -> Size {
        Size::new(u32::from(FONT_WIDTH), u32::from(FONT_HEIGHT))
    }
}

impl DrawTarget for GlyphCell {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let inside = (0..i32::from(FONT_WIDTH)).contains(&point.x)
                && (0..i32::from(FONT_HEIGHT)).contains(&point.y);
            if inside && color.is_on() {
                self.rows[point.y as usize] |= 1 << point.x;
            }
        }
        Ok(())
    }
}
