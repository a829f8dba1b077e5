//! FT6206 capacitive touch controller (I2C)
//!
//! # Register map (subset)
//!
//! Register 0 starts a 15-byte block: a 3-byte header whose low nibble
//! at offset 2 is the touch count, then one 6-byte record per finger:
//!
//! | Byte | Bits 7-6     | Bits 5-4 | Bits 3-0     |
//! |------|--------------|----------|--------------|
//! | 0    | event status | -        | X bits 11-8  |
//! | 1    | X bits 7-0                              |
//! | 2    | finger id               | Y bits 11-8  |
//! | 3    | Y bits 7-0                              |
//! | 4-5  | weight / area (unused)                  |

use fingerpaint_core::config::PanelGeometry;
use fingerpaint_core::touch::{sensor_to_panel, TouchFrame, TouchPoint, MAX_TOUCH_POINTS};
use fingerpaint_core::traits::TouchSensor;
use fingerpaint_core::Fault;
use fingerpaint_hal::i2c::Direction;
use fingerpaint_hal::I2cBus;

use super::bus::TouchBus;

/// 7-bit bus address
pub const FT6206_ADDR: u8 = 0x38;

/// FT6206 register addresses
pub mod reg {
    /// Start of the touch data block
    pub const TD_STATUS_BLOCK: u8 = 0x00;
    /// Operating mode (0 = polling, 1 = trigger)
    pub const G_MODE: u8 = 0xA4;
    /// Firmware id block
    pub const FIRMID: u8 = 0xA6;
}

/// Panel vendor id reported by FocalTech parts
pub const FOCALTECH_PANEL_ID: u8 = 0x11;

const MODE_POLLING: u8 = 0x00;

const ID_BLOCK_LEN: usize = 9;
const ID_PANEL_BYTE: usize = 2;

/// Touch data block length
pub const PACKET_LEN: usize = 15;
const COUNT_BYTE: usize = 2;
const RECORD_BASE: usize = 3;
const RECORD_LEN: usize = 6;

/// Per-finger event flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchStatus {
    /// Finger just landed (0b00)
    PressDown,
    /// Finger just lifted (0b01)
    LiftUp,
    /// Finger held on the panel (0b10)
    Contact,
    /// Slot carries no event (0b11)
    NoEvent,
}

impl TouchStatus {
    /// Decode the two status bits at the top of a record's first byte
    pub fn from_record(byte: u8) -> Self {
        match byte >> 6 {
            0b00 => TouchStatus::PressDown,
            0b01 => TouchStatus::LiftUp,
            0b10 => TouchStatus::Contact,
            _ => TouchStatus::NoEvent,
        }
    }

    /// Anything but "no event" counts as a finger on the panel
    pub fn is_touched(self) -> bool {
        self != TouchStatus::NoEvent
    }
}

/// Decode one touch data block into `frame`
///
/// Only the slots below the (clamped) count are written.
pub fn decode_packet(packet: &[u8; PACKET_LEN], panel: PanelGeometry, frame: &mut TouchFrame) {
    let count = usize::from(packet[COUNT_BYTE] & 0x0F).min(MAX_TOUCH_POINTS);

    for (i, slot) in frame.points.iter_mut().enumerate().take(count) {
        let rec = &packet[RECORD_BASE + i * RECORD_LEN..][..RECORD_LEN];
        let raw_x = u16::from(rec[1]) | u16::from(rec[0] & 0x0F) << 8;
        let raw_y = u16::from(rec[3]) | u16::from(rec[2] & 0x0F) << 8;
        let (x, y) = sensor_to_panel(raw_x, raw_y, panel);

        *slot = TouchPoint {
            touched: TouchStatus::from_record(rec[0]).is_touched(),
            id: rec[2] >> 4,
            x,
            y,
        };
    }

    frame.set_count(count);
}

/// FT6206 driver
pub struct Ft6206<I2C> {
    bus: TouchBus<I2C>,
    panel: PanelGeometry,
}

impl<I2C: I2cBus> Ft6206<I2C> {
    /// Wrap a bus bound to [`FT6206_ADDR`]; points are mapped onto `panel`
    pub fn new(bus: TouchBus<I2C>, panel: PanelGeometry) -> Self {
        Self { bus, panel }
    }

    /// Check the panel id, then switch the controller to polling mode
    pub fn read_device_id(&mut self) -> Result<(), Fault> {
        let mut block = [0u8; ID_BLOCK_LEN];
        self.read_block(reg::FIRMID, &mut block)?;

        let found = block[ID_PANEL_BYTE];
        if found != FOCALTECH_PANEL_ID {
            return Err(Fault::UnknownTouchPanel { found });
        }

        self.bus
            .transfer(&mut [reg::G_MODE, MODE_POLLING], Direction::Write)
    }

    /// Fetch and decode the current touch block
    pub fn read_touch_points(&mut self, frame: &mut TouchFrame) -> Result<(), Fault> {
        let mut packet = [0u8; PACKET_LEN];
        self.read_block(reg::TD_STATUS_BLOCK, &mut packet)?;
        decode_packet(&packet, self.panel, frame);
        Ok(())
    }

    /// Release the bus channel
    pub fn release(self) -> TouchBus<I2C> {
        self.bus
    }

    fn read_block(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Fault> {
        self.bus.transfer(&mut [register], Direction::Write)?;
        self.bus.transfer(buf, Direction::Read)
    }
}

impl<I2C: I2cBus> TouchSensor for Ft6206<I2C> {
    fn identify(&mut self) -> Result<(), Fault> {
        self.read_device_id()
    }

    fn read_touch_points(&mut self, frame: &mut TouchFrame) -> Result<(), Fault> {
        Ft6206::read_touch_points(self, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockI2c;
    use std::vec;

    fn packet(count: u8, records: &[[u8; 4]]) -> [u8; PACKET_LEN] {
        let mut p = [0u8; PACKET_LEN];
        p[COUNT_BYTE] = count;
        for (i, rec) in records.iter().enumerate() {
            let base = RECORD_BASE + i * RECORD_LEN;
            p[base..base + 4].copy_from_slice(rec);
        }
        p
    }

    fn driver(reads: &[&[u8]]) -> Ft6206<MockI2c> {
        Ft6206::new(
            TouchBus::new(MockI2c::with_reads(reads), FT6206_ADDR),
            PanelGeometry::PORTRAIT,
        )
    }

    #[test]
    fn test_press_is_touched_and_inverted() {
        // status 0b00, raw (100, 50)
        let p = packet(1, &[[0x00, 100, 0x00, 50]]);
        let mut frame = TouchFrame::new();

        decode_packet(&p, PanelGeometry::PORTRAIT, &mut frame);

        assert_eq!(frame.count(), 1);
        assert_eq!(
            frame.points[0],
            TouchPoint {
                touched: true,
                id: 0,
                x: 140,
                y: 270
            }
        );
    }

    #[test]
    fn test_no_event_is_untouched() {
        let p = packet(1, &[[0xC0, 100, 0x00, 50]]);
        let mut frame = TouchFrame::new();

        decode_packet(&p, PanelGeometry::PORTRAIT, &mut frame);

        assert!(!frame.points[0].touched);
        assert!(!frame.any_touched());
    }

    #[test]
    fn test_status_bits() {
        assert_eq!(TouchStatus::from_record(0x00), TouchStatus::PressDown);
        assert_eq!(TouchStatus::from_record(0x4F), TouchStatus::LiftUp);
        assert_eq!(TouchStatus::from_record(0x80), TouchStatus::Contact);
        assert_eq!(TouchStatus::from_record(0xC0), TouchStatus::NoEvent);
        assert!(TouchStatus::LiftUp.is_touched());
    }

    #[test]
    fn test_id_and_high_coordinate_bits() {
        // id 1, raw x = 0x0E6 (230), raw y = 0x12C (300)
        let p = packet(2, &[[0x00, 10, 0x00, 10], [0x80, 0xE6, 0x11, 0x2C]]);
        let mut frame = TouchFrame::new();

        decode_packet(&p, PanelGeometry::PORTRAIT, &mut frame);

        assert_eq!(frame.count(), 2);
        let second = frame.points[1];
        assert_eq!(second.id, 1);
        assert_eq!((second.x, second.y), (10, 20));
    }

    #[test]
    fn test_count_clamped_to_two() {
        let p = packet(0x0F, &[[0x00, 1, 0x00, 1], [0x00, 2, 0x00, 2]]);
        let mut frame = TouchFrame::new();

        decode_packet(&p, PanelGeometry::PORTRAIT, &mut frame);

        assert_eq!(frame.count(), 2);
    }

    #[test]
    fn test_zero_count_leaves_slots() {
        let p = packet(0, &[[0x00, 100, 0x00, 50]]);
        let mut frame = TouchFrame::new();
        frame.points[0].x = 77;

        decode_packet(&p, PanelGeometry::PORTRAIT, &mut frame);

        assert_eq!(frame.count(), 0);
        assert_eq!(frame.points[0].x, 77);
    }

    #[test]
    fn test_read_touch_points_selects_register_zero() {
        let p = packet(1, &[[0x00, 100, 0x00, 50]]);
        let mut ft = driver(&[&p]);
        let mut frame = TouchFrame::new();

        ft.read_touch_points(&mut frame).unwrap();

        assert_eq!(frame.points[0].x, 140);
        let i2c = ft.release().release();
        assert_eq!(i2c.writes, vec![(FT6206_ADDR, vec![0x00])]);
    }

    #[test]
    fn test_identify_sets_polling_mode() {
        let id = [0x00, 0x00, FOCALTECH_PANEL_ID, 0, 0, 0, 0, 0, 0];
        let mut ft = driver(&[&id]);

        ft.identify().unwrap();

        let i2c = ft.release().release();
        assert_eq!(
            i2c.writes,
            vec![(FT6206_ADDR, vec![0xA6]), (FT6206_ADDR, vec![0xA4, 0x00])]
        );
    }

    #[test]
    fn test_identify_rejects_other_panel() {
        let id = [0x00, 0x00, 0x42, 0, 0, 0, 0, 0, 0];
        let mut ft = driver(&[&id]);

        assert_eq!(ft.identify(), Err(Fault::UnknownTouchPanel { found: 0x42 }));
        assert_eq!(ft.release().release().writes.len(), 1);
    }

    #[test]
    fn test_bus_failure() {
        let mut i2c = MockI2c::default();
        i2c.fail = true;
        let mut ft = Ft6206::new(TouchBus::new(i2c, FT6206_ADDR), PanelGeometry::PORTRAIT);

        assert_eq!(ft.read_touch_points(&mut TouchFrame::new()), Err(Fault::TouchBus));
    }
}
