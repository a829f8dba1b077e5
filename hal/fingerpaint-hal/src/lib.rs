//! Fingerpaint Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that the display and
//! touch drivers are written against. Chip-specific HALs implement them so
//! the same driver and application code can run on different hardware, and
//! on the host under test with mock buses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  fingerpaint-drivers / fingerpaint-core │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  fingerpaint-hal (this crate - traits)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ fingerpaint-hal-  │
//!           │     rp2040        │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs (DC select, reset)
//! - [`i2c::I2cBus`] - Addressed read/write channel to the touch controller
//! - [`spi::SpiBus`] - Synchronous serial channel to the display controller

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use i2c::{I2cBus, I2cConfig};
pub use spi::{SpiBus, SpiConfig};
