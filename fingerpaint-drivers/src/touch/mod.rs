//! FT6206 touch stack

pub mod bus;
pub mod ft6206;

pub use bus::TouchBus;
pub use ft6206::{Ft6206, TouchStatus, FT6206_ADDR};
