//! Events that trigger state transitions

/// Events observed by the paint loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// The touch controller reported contact (session flag raised)
    TouchDetected,
}
