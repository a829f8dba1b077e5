//! Touch bus channel
//!
//! Each transfer runs with interrupts masked so the edge interrupt cannot
//! land in the middle of a register access.

use fingerpaint_core::Fault;
use fingerpaint_hal::i2c::Direction;
use fingerpaint_hal::I2cBus;

/// Addressed I2C channel to one device
pub struct TouchBus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2cBus> TouchBus<I2C> {
    /// Bind the bus to a 7-bit device address
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// One blocking transaction: send `buf` or fill it from the device
    pub fn transfer(&mut self, buf: &mut [u8], direction: Direction) -> Result<(), Fault> {
        let address = self.address;
        let i2c = &mut self.i2c;
        critical_section::with(|_| match direction {
            Direction::Write => i2c.write(address, buf),
            Direction::Read => i2c.read(address, buf),
        })
        .map_err(|_| Fault::TouchBus)
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}
