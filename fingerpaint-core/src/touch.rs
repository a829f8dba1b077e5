//! Touch data model
//!
//! The controller tracks at most two fingers. Each decode rewrites the
//! frame in place; slots past `count` are stale and must be ignored.

use crate::config::PanelGeometry;

/// Touch slots the controller reports
pub const MAX_TOUCH_POINTS: usize = 2;

/// One finger as reported by the controller, in panel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    /// Slot reports a finger (anything but "no event")
    pub touched: bool,
    /// Controller-assigned finger id (0..=15)
    pub id: u8,
    /// Column, 0..=panel width
    pub x: u16,
    /// Row, 0..=panel height
    pub y: u16,
}

/// Result of one touch decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchFrame {
    /// Slot storage; only the first `count()` entries are valid
    pub points: [TouchPoint; MAX_TOUCH_POINTS],
    count: u8,
}

impl TouchFrame {
    /// Empty frame
    pub const fn new() -> Self {
        Self {
            points: [TouchPoint {
                touched: false,
                id: 0,
                x: 0,
                y: 0,
            }; MAX_TOUCH_POINTS],
            count: 0,
        }
    }

    /// Number of valid slots
    pub fn count(&self) -> usize {
        self.count as usize
    }

    /// Set the number of valid slots, clamped to [`MAX_TOUCH_POINTS`]
    pub fn set_count(&mut self, count: usize) {
        self.count = count.min(MAX_TOUCH_POINTS) as u8;
    }

    /// The valid slots
    pub fn active(&self) -> &[TouchPoint] {
        &self.points[..self.count()]
    }

    /// Check whether any valid slot has a finger down
    pub fn any_touched(&self) -> bool {
        self.active().iter().any(|p| p.touched)
    }

    /// Forget all slots
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

/// Linear remap of `value` from one range onto another
///
/// Integer arithmetic, truncating toward zero. A degenerate input range
/// maps everything to `out_min`.
pub fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Convert raw sensor coordinates to panel coordinates
///
/// The sensor's axes run opposite to the panel's, so both are mirrored.
/// Results are clamped onto the panel.
pub fn sensor_to_panel(raw_x: u16, raw_y: u16, panel: PanelGeometry) -> (u16, u16) {
    (
        mirror_axis(raw_x, panel.width),
        mirror_axis(raw_y, panel.height),
    )
}

fn mirror_axis(raw: u16, extent: u16) -> u16 {
    let extent = i32::from(extent);
    let mapped = map_range(i32::from(raw), 0, extent, extent, 0);
    mapped.clamp(0, extent) as u16
}
