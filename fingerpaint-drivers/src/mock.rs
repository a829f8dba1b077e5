//! Recording bus and pin doubles shared by the driver tests

use core::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use fingerpaint_hal::{I2cBus, OutputPin, SpiBus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    Dc(bool),
    Rst(bool),
    Spi(Vec<u8>),
    Delay(u32),
}

/// Shared, ordered record of everything the display side did
#[derive(Debug, Default, Clone)]
pub struct Log(Rc<RefCell<Vec<BusEvent>>>);

impl Log {
    fn push(&self, event: BusEvent) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<BusEvent> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub struct MockSpi {
    log: Log,
    pub fail: bool,
}

impl MockSpi {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            fail: false,
        }
    }
}

impl SpiBus for MockSpi {
    type Error = ();

    fn write(&mut self, data: &[u8]) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        self.log.push(BusEvent::Spi(data.to_vec()));
        Ok(())
    }
}

pub struct MockPin {
    log: Log,
    reset_line: bool,
    high: bool,
}

impl MockPin {
    pub fn dc(log: &Log) -> Self {
        Self {
            log: log.clone(),
            reset_line: false,
            high: false,
        }
    }

    pub fn rst(log: &Log) -> Self {
        Self {
            log: log.clone(),
            reset_line: true,
            high: false,
        }
    }

    fn record(&mut self, high: bool) {
        self.high = high;
        let event = if self.reset_line {
            BusEvent::Rst(high)
        } else {
            BusEvent::Dc(high)
        };
        self.log.push(event);
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.record(true);
    }

    fn set_low(&mut self) {
        self.record(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(BusEvent::Delay(ms));
    }
}

/// Display traffic as the controller sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tx {
    Cmd(u8),
    Data(Vec<u8>),
}

/// Fold the raw log into commands and their (merged) parameter bytes
pub fn transactions(log: &Log) -> Vec<Tx> {
    let mut dc_high = false;
    let mut out: Vec<Tx> = Vec::new();

    for event in log.events() {
        match event {
            BusEvent::Dc(high) => dc_high = high,
            BusEvent::Spi(bytes) if !dc_high => out.extend(bytes.into_iter().map(Tx::Cmd)),
            BusEvent::Spi(bytes) => match out.last_mut() {
                Some(Tx::Data(data)) => data.extend(bytes),
                _ => out.push(Tx::Data(bytes)),
            },
            _ => {}
        }
    }
    out
}

/// I2C target that records writes and replays canned read blocks
#[derive(Debug, Default)]
pub struct MockI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub reads: VecDeque<Vec<u8>>,
    pub read_addresses: Vec<u8>,
    pub fail: bool,
}

impl MockI2c {
    pub fn with_reads(reads: &[&[u8]]) -> Self {
        Self {
            reads: reads.iter().map(|r| r.to_vec()).collect(),
            ..Default::default()
        }
    }
}

impl I2cBus for MockI2c {
    type Error = ();

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        self.read_addresses.push(address);
        let block = self.reads.pop_front().unwrap_or_default();
        let n = block.len().min(buf.len());
        buf[..n].copy_from_slice(&block[..n]);
        Ok(())
    }
}
