//! RP2040-specific HAL for the Fingerpaint firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `fingerpaint-hal` traits on top of `embassy-rp` blocking peripherals:
//!
//! - Push-pull outputs for the display DC and reset lines
//! - Blocking SPI master for the display controller
//! - Blocking I2C master for the touch controller, with error conversion
//! - Translation of the board-agnostic bus configs into embassy configs

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export shared traits from fingerpaint-hal for convenience
pub use fingerpaint_hal::{I2cBus, OutputPin, SpiBus};
