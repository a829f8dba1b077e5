//! Render primitives
//!
//! Everything on screen is built from filled rectangles and 8x14 glyph
//! cells streamed into an addressing window.

use core::fmt::{self, Write};

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use embedded_graphics::prelude::RgbColor;
use embedded_hal::delay::DelayNs;
use fingerpaint_core::config::{FONT_HEIGHT, FONT_WIDTH, MAX_TEXT_CHARS};
use fingerpaint_core::traits::Canvas;
use fingerpaint_core::Fault;
use fingerpaint_hal::{OutputPin, SpiBus};
use heapless::String;

use super::font::GlyphSource;
use super::ili9341::Ili9341;

const CELL_PIXELS: usize = FONT_WIDTH as usize * FONT_HEIGHT as usize;

/// Drawing front-end over an ILI9341
pub struct Renderer<SPI, DC, D, G> {
    lcd: Ili9341<SPI, DC, D>,
    glyphs: G,
}

impl<SPI, DC, D, G> Renderer<SPI, DC, D, G>
where
    SPI: SpiBus,
    DC: OutputPin,
    D: DelayNs,
    G: GlyphSource,
{
    /// Draw through an initialized driver with `glyphs` for text
    pub fn new(lcd: Ili9341<SPI, DC, D>, glyphs: G) -> Self {
        Self { lcd, glyphs }
    }

    /// Fill the window between two corners
    ///
    /// Streams `x1 * y1` words rather than the window's area. The
    /// controller wraps inside the window, so the result on glass is the
    /// same solid fill; the full-screen clear depends on this count.
    pub fn filled_rectangle(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: Rgb565,
    ) -> Result<(), Fault> {
        self.lcd.set_window(x0, y0, x1, y1)?;
        self.lcd.begin_pixel_stream()?;
        self.lcd.write_pixels(color, u32::from(x1) * u32::from(y1))
    }

    /// Vertical bar `length` tall; negative `thickness` grows leftwards
    pub fn vertical_line(
        &mut self,
        x: u16,
        y: u16,
        length: u16,
        thickness: i16,
        color: Rgb565,
    ) -> Result<(), Fault> {
        let (x1, y1) = far_corner(x, y, thickness.into(), length.into())?;
        self.filled_rectangle(x, y, x1, y1, color)
    }

    /// Horizontal bar `length` wide; negative `thickness` grows upwards
    pub fn horizontal_line(
        &mut self,
        x: u16,
        y: u16,
        length: u16,
        thickness: i16,
        color: Rgb565,
    ) -> Result<(), Fault> {
        let (x1, y1) = far_corner(x, y, length.into(), thickness.into())?;
        self.filled_rectangle(x, y, x1, y1, color)
    }

    /// Border drawn inside the rectangle's edges
    pub fn unfilled_rectangle(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        thickness: i16,
        color: Rgb565,
    ) -> Result<(), Fault> {
        self.vertical_line(x, y, height, thickness, color)?;
        self.horizontal_line(x, y.saturating_add(height), width, -thickness, color)?;
        self.horizontal_line(x, y, width, thickness, color)?;
        self.vertical_line(x.saturating_add(width), y, height, -thickness, color)
    }

    /// One glyph cell, ink on black
    pub fn draw_char(&mut self, x: u16, y: u16, ch: char, color: Rgb565) -> Result<(), Fault> {
        let rows = self.glyphs.glyph(ch);
        let ink = color.into_storage().to_be_bytes();
        let paper = Rgb565::BLACK.into_storage().to_be_bytes();

        let mut cell = [0u8; CELL_PIXELS * 2];
        for (i, pixel) in cell.chunks_exact_mut(2).enumerate() {
            let row = rows[i / FONT_WIDTH as usize];
            let on = (row >> (i % FONT_WIDTH as usize)) & 1 == 1;
            pixel.copy_from_slice(if on { &ink } else { &paper });
        }

        self.lcd.set_window(
            x,
            y,
            x.saturating_add(FONT_WIDTH - 1),
            y.saturating_add(FONT_HEIGHT - 1),
        )?;
        self.lcd.begin_pixel_stream()?;
        self.lcd.write_pixel_bytes(&cell)
    }

    /// Formatted text on one line, no wrapping
    ///
    /// Output past one panel row of glyphs is dropped.
    pub fn print(&mut self, x: u16, y: u16, color: Rgb565, args: fmt::Arguments<'_>) -> Result<(), Fault> {
        let mut text: String<MAX_TEXT_CHARS> = String::new();
        // Truncating writer never reports an error
        let _ = Truncating(&mut text).write_fmt(args);

        let mut cursor = x;
        for ch in text.chars() {
            self.draw_char(cursor, y, ch, color)?;
            cursor = cursor.saturating_add(FONT_WIDTH);
        }
        Ok(())
    }
}

impl<SPI, DC, D, G> Canvas for Renderer<SPI, DC, D, G>
where
    SPI: SpiBus,
    DC: OutputPin,
    D: DelayNs,
    G: GlyphSource,
{
    fn fill_rect(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, color: Rgb565) -> Result<(), Fault> {
        self.filled_rectangle(x0, y0, x1, y1, color)
    }

    fn outline_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        thickness: i16,
        color: Rgb565,
    ) -> Result<(), Fault> {
        self.unfilled_rectangle(x, y, width, height, thickness, color)
    }

    fn print(&mut self, x: u16, y: u16, color: Rgb565, args: fmt::Arguments<'_>) -> Result<(), Fault> {
        Renderer::print(self, x, y, color, args)
    }
}

/// Offset a corner, rejecting results that leave the u16 coordinate space
fn far_corner(x: u16, y: u16, dx: i32, dy: i32) -> Result<(u16, u16), Fault> {
    let x1 = i32::from(x) + dx;
    let y1 = i32::from(y) + dy;
    match (u16::try_from(x1), u16::try_from(y1)) {
        (Ok(x1), Ok(y1)) => Ok((x1, y1)),
        _ => Err(Fault::WindowOutOfBounds {
            x0: x.into(),
            y0: y.into(),
            x1,
            y1,
        }),
    }
}

struct Truncating<'a, const N: usize>(&'a mut String<N>);

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.0.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::font::GlyphRows;
    use crate::display::ili9341::cmd;
    use crate::display::interface::SpiInterface;
    use crate::mock::{transactions, Log, MockDelay, MockPin, MockSpi, Tx};
    use fingerpaint_core::config::{DisplayTiming, PanelGeometry};
    use fingerpaint_core::traits::CanvasExt;
    use std::vec;
    use std::vec::Vec;

    /// Every glyph lights columns 0 and 2 of its top row
    struct Stripe;

    impl GlyphSource for Stripe {
        fn glyph(&self, _ch: char) -> GlyphRows {
            let mut rows = [0; FONT_HEIGHT as usize];
            rows[0] = 0b101;
            rows
        }
    }

    type TestRenderer = Renderer<MockSpi, MockPin, MockDelay, Stripe>;

    fn renderer(log: &Log) -> TestRenderer {
        let iface = SpiInterface::new(
            MockSpi::new(log),
            MockPin::dc(log),
            MockDelay::new(log),
            &DisplayTiming::ILI9341,
        );
        Renderer::new(
            Ili9341::new(iface, PanelGeometry::PORTRAIT, DisplayTiming::ILI9341),
            Stripe,
        )
    }

    fn be(data: &[u8]) -> u16 {
        u16::from_be_bytes([data[0], data[1]])
    }

    /// Windows in the order they were set, plus the byte count streamed into each
    fn draws(log: &Log) -> Vec<((u16, u16, u16, u16), usize)> {
        let txs = transactions(log);
        let mut out = Vec::new();
        let mut i = 0;
        while i + 4 < txs.len() {
            if let (Tx::Cmd(cmd::CASET), Tx::Data(xs), Tx::Cmd(cmd::PASET), Tx::Data(ys), Tx::Cmd(cmd::RAMWR)) =
                (&txs[i], &txs[i + 1], &txs[i + 2], &txs[i + 3], &txs[i + 4])
            {
                let len = match txs.get(i + 5) {
                    Some(Tx::Data(px)) => px.len(),
                    _ => 0,
                };
                out.push(((be(&xs[0..2]), be(&ys[0..2]), be(&xs[2..4]), be(&ys[2..4])), len));
                i += 5;
            } else {
                i += 1;
            }
        }
        out
    }

    #[test]
    fn test_fill_streams_x1_times_y1() {
        let log = Log::default();
        let mut r = renderer(&log);

        r.filled_rectangle(20, 100, 26, 106, Rgb565::RED).unwrap();

        assert_eq!(draws(&log), vec![((20, 100, 26, 106), 26 * 106 * 2)]);
    }

    #[test]
    fn test_clear_screen_covers_panel() {
        let log = Log::default();
        let mut r = renderer(&log);

        r.clear_screen().unwrap();

        assert_eq!(draws(&log), vec![((0, 0, 240, 320), 240 * 320 * 2)]);
        let txs = transactions(&log);
        let Some(Tx::Data(pixels)) = txs.last() else {
            panic!("no pixel data");
        };
        assert!(pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_negative_thickness_draws_backwards() {
        let log = Log::default();
        let mut r = renderer(&log);

        r.vertical_line(40, 0, 40, -6, Rgb565::WHITE).unwrap();

        assert_eq!(draws(&log), vec![((34, 0, 40, 40), 34 * 40 * 2)]);
    }

    #[test]
    fn test_line_below_zero_faults() {
        let log = Log::default();
        let mut r = renderer(&log);

        assert_eq!(
            r.horizontal_line(0, 3, 10, -6, Rgb565::WHITE),
            Err(Fault::WindowOutOfBounds {
                x0: 0,
                y0: 3,
                x1: 10,
                y1: -3
            })
        );
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_unfilled_rectangle_edges_in_order() {
        let log = Log::default();
        let mut r = renderer(&log);

        r.unfilled_rectangle(80, 0, 40, 40, 6, Rgb565::WHITE).unwrap();

        let windows: Vec<_> = draws(&log).into_iter().map(|(w, _)| w).collect();
        assert_eq!(
            windows,
            vec![(80, 0, 86, 40), (80, 34, 120, 40), (80, 0, 120, 6), (114, 0, 120, 40)]
        );
    }

    #[test]
    fn test_draw_char_lsb_first() {
        let log = Log::default();
        let mut r = renderer(&log);

        r.draw_char(16, 30, 'x', Rgb565::RED).unwrap();

        let drawn = draws(&log);
        assert_eq!(drawn, vec![((16, 30, 23, 43), CELL_PIXELS * 2)]);

        let txs = transactions(&log);
        let Some(Tx::Data(pixels)) = txs.last() else {
            panic!("no pixel data");
        };
        let words: Vec<u16> = pixels.chunks(2).map(be).collect();
        assert_eq!(words[..4], [0xF800, 0x0000, 0xF800, 0x0000]);
        assert!(words[4..].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_print_advances_one_cell_per_char() {
        let log = Log::default();
        let mut r = renderer(&log);

        r.print(40, 160, Rgb565::WHITE, format_args!("{}{}", "ok", 7)).unwrap();

        let origins: Vec<_> = draws(&log).into_iter().map(|((x, y, _, _), _)| (x, y)).collect();
        assert_eq!(origins, vec![(40, 160), (48, 160), (56, 160)]);
    }

    #[test]
    fn test_print_truncates_to_one_row() {
        let log = Log::default();
        let mut r = renderer(&log);

        r.print(0, 0, Rgb565::WHITE, format_args!("{:>40}", "x")).unwrap();

        let drawn = draws(&log);
        assert_eq!(drawn.len(), MAX_TEXT_CHARS);
        assert_eq!(drawn.last().unwrap().0, (232, 0, 239, 13));
    }

    #[test]
    fn test_palette_boxes() {
        let log = Log::default();
        let mut r = renderer(&log);

        r.draw_palette().unwrap();

        let windows: Vec<_> = draws(&log).into_iter().map(|(w, _)| w).collect();
        assert_eq!(
            windows,
            vec![
                (0, 0, 40, 40),
                (40, 0, 80, 40),
                (80, 0, 120, 40),
                (120, 0, 160, 40),
                (160, 0, 200, 40),
                (200, 0, 240, 40),
            ]
        );
    }
}
