//! Drawing surface trait

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

use crate::config::{BOX_SIZE, BRUSH_SIZE, HIGHLIGHT_THICKNESS, PANEL_HEIGHT, PANEL_WIDTH};
use crate::fault::Fault;
use crate::palette::PenColor;

/// Primitive drawing operations on the panel
pub trait Canvas {
    /// Fill the window with corners `(x0, y0)` and `(x1, y1)`
    ///
    /// Corners may be given in either order.
    fn fill_rect(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, color: Rgb565)
        -> Result<(), Fault>;

    /// Draw a rectangular border `thickness` pixels wide
    fn outline_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        thickness: i16,
        color: Rgb565,
    ) -> Result<(), Fault>;

    /// Render formatted text with its top-left corner at `(x, y)`
    ///
    /// Output longer than one panel row of glyphs is truncated.
    fn print(&mut self, x: u16, y: u16, color: Rgb565, args: fmt::Arguments<'_>)
        -> Result<(), Fault>;
}

/// Screen-level drawing built on [`Canvas`]
pub trait CanvasExt: Canvas {
    /// Paint the whole panel black
    fn clear_screen(&mut self) -> Result<(), Fault> {
        self.fill_rect(0, 0, PANEL_WIDTH, PANEL_HEIGHT, Rgb565::BLACK)
    }

    /// Draw the six pen boxes across the top band
    fn draw_palette(&mut self) -> Result<(), Fault> {
        for pen in PenColor::ALL {
            let x = pen.box_x();
            self.fill_rect(x, 0, x + BOX_SIZE, BOX_SIZE, pen.color())?;
        }
        Ok(())
    }

    /// Draw (or erase, with the pen's own color) the selection border
    fn mark_pen(&mut self, pen: PenColor, color: Rgb565) -> Result<(), Fault> {
        self.outline_rect(pen.box_x(), 0, BOX_SIZE, BOX_SIZE, HIGHLIGHT_THICKNESS, color)
    }

    /// Paint one brush square with its corner at the touch point
    ///
    /// The far corner is pulled back onto the panel near the edges.
    fn dab(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), Fault> {
        let x1 = x.saturating_add(BRUSH_SIZE).min(PANEL_WIDTH);
        let y1 = y.saturating_add(BRUSH_SIZE).min(PANEL_HEIGHT);
        self.fill_rect(x, y, x1, y1, color)
    }
}

impl<T: Canvas + ?Sized> CanvasExt for T {}
