//! Inter-task communication
//!
//! The touch edge task and the painter task share two statics: the
//! session flag, and a wake-up signal that lets the painter sleep while
//! nobody is touching the panel.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use fingerpaint_core::SessionFlag;

/// Raised on every falling edge of the touch IRQ line, cleared by the
/// painter once the finger lifts
pub static TOUCH_SESSION: SessionFlag = SessionFlag::new();

/// Wakes the painter after a touch edge
pub static TOUCH_WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
