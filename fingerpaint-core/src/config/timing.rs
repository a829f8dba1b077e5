//! Fixed delays
//!
//! The display values are part of the controller's contract; shortening
//! them risks the panel ignoring commands issued too early.

/// Delays around the display controller reset and init sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayTiming {
    /// Reset line held low
    pub reset_pulse_ms: u32,
    /// Wait after releasing reset
    pub reset_settle_ms: u32,
    /// Wait after SLPOUT before the next command
    pub sleep_out_ms: u32,
    /// Wait after the init sequence before drawing
    pub init_settle_ms: u32,
    /// Delay before and after every command byte (controller latch margin)
    pub command_guard_ms: u32,
}

impl DisplayTiming {
    /// ILI9341 datasheet margins
    pub const ILI9341: Self = Self {
        reset_pulse_ms: 1,
        reset_settle_ms: 10,
        sleep_out_ms: 120,
        init_settle_ms: 200,
        command_guard_ms: 1,
    };
}

impl Default for DisplayTiming {
    fn default() -> Self {
        Self::ILI9341
    }
}

/// Delays in the paint loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiTiming {
    /// Pause after the first touch arms the paint loop
    pub activation_settle_ms: u32,
    /// Pause after a palette selection so one tap selects once
    pub palette_debounce_ms: u32,
}

impl UiTiming {
    /// Defaults tuned for a finger on a 2.8" panel
    pub const DEFAULT: Self = Self {
        activation_settle_ms: 100,
        palette_debounce_ms: 200,
    };
}

impl Default for UiTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}
