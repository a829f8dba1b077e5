//! I2C master for RP2040
//!
//! Provides the addressed channel to the FT6206 touch controller.

use embassy_rp::i2c::{self, AbortReason, Blocking, I2c, Instance};
use fingerpaint_hal::I2cConfig;

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Device did not acknowledge its address or a data byte
    Nack,
    /// Arbitration lost to another master
    ArbitrationLost,
    /// Transfer aborted for another reason
    Aborted,
    /// Zero-length or oversized buffer
    InvalidLength,
    /// Address not usable (reserved or out of range)
    InvalidAddress,
}

impl From<i2c::Error> for I2cBusError {
    fn from(e: i2c::Error) -> Self {
        match e {
            i2c::Error::Abort(AbortReason::NoAcknowledge) => I2cBusError::Nack,
            i2c::Error::Abort(AbortReason::ArbitrationLoss) => I2cBusError::ArbitrationLost,
            i2c::Error::Abort(_) => I2cBusError::Aborted,
            i2c::Error::InvalidReadBufferLength | i2c::Error::InvalidWriteBufferLength => {
                I2cBusError::InvalidLength
            }
            _ => I2cBusError::InvalidAddress,
        }
    }
}

/// Blocking I2C master implementing [`fingerpaint_hal::I2cBus`]
pub struct RpI2c<'d, T: Instance> {
    i2c: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> RpI2c<'d, T> {
    /// Wrap an already-configured blocking I2C peripheral
    pub fn new(i2c: I2c<'d, T, Blocking>) -> Self {
        Self { i2c }
    }
}

impl<'d, T: Instance> fingerpaint_hal::I2cBus for RpI2c<'d, T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::write(&mut self.i2c, address, data).map_err(I2cBusError::from)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::read(&mut self.i2c, address, buf).map_err(I2cBusError::from)
    }
}

/// Translate a board-agnostic I2C config into an embassy-rp config
pub fn embassy_config(config: &I2cConfig) -> i2c::Config {
    let mut out = i2c::Config::default();
    out.frequency = config.frequency;
    out
}
