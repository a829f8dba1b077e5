//! Configuration types
//!
//! Everything is fixed at compile time: panel geometry, the palette band
//! layout, and the delays the display controller and the UI depend on.

pub mod panel;
pub mod timing;

pub use panel::*;
pub use timing::*;
