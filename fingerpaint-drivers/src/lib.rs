//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in fingerpaint-core for the two controllers on the board:
//!
//! - ILI9341 TFT controller over SPI (protocol driver and render primitives)
//! - Glyph rasterization from `embedded-graphics` mono fonts
//! - FT6206 capacitive touch controller over I2C

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod display;
pub mod touch;

#[cfg(test)]
mod mock;
