//! Board-agnostic core logic for the finger-painting firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Compile-time panel, palette and timing configuration
//! - The unrecoverable fault type shared by every layer
//! - Touch data model and sensor-to-panel coordinate mapping
//! - Palette hit-testing
//! - State machine for arming the paint loop
//! - Hardware abstraction traits (canvas, touch sensor)
//! - The touch session flag shared with the edge interrupt
//! - The paint loop itself

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod app;
pub mod config;
pub mod fault;
pub mod palette;
pub mod session;
pub mod state;
pub mod touch;
pub mod traits;

pub use app::{Painter, StepReport};
pub use fault::Fault;
pub use palette::PenColor;
pub use session::SessionFlag;
pub use touch::{TouchFrame, TouchPoint};
