//! ILI9341 display stack
//!
//! Layered bottom-up: [`SpiInterface`] drives the data/command line and
//! the bus, [`Ili9341`] speaks the controller's command set, and
//! [`Renderer`] turns rectangles and text into pixel streams.

pub mod font;
pub mod ili9341;
pub mod interface;
pub mod render;

pub use font::{GlyphRows, GlyphSource, MonoFontGlyphs};
pub use ili9341::{Ili9341, Window};
pub use interface::SpiInterface;
pub use render::Renderer;
