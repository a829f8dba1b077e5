//! Hardware abstraction traits
//!
//! These traits define the interface between the paint loop and the
//! display and touch drivers.

pub mod canvas;
pub mod touch;

pub use canvas::{Canvas, CanvasExt};
pub use touch::TouchSensor;
