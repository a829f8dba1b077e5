//! Touch session flag
//!
//! Set from the touch controller's interrupt edge, cleared by the paint
//! loop once a read shows the finger has lifted. The only state shared
//! between the edge watcher and the loop.

use portable_atomic::{AtomicBool, Ordering};

/// Single-bit "a touch is in progress" latch
#[derive(Debug)]
pub struct SessionFlag {
    pending: AtomicBool,
}

impl SessionFlag {
    /// Create a lowered flag (usable in a `static`)
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Mark a touch session as started. Idempotent.
    pub fn raise(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Check whether a touch session is in progress
    pub fn is_raised(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// End the touch session
    ///
    /// An edge arriving between the caller's last read and this call is
    /// lost; the next edge raises the flag again.
    pub fn clear(&self) {
        self.pending.store(false, Ordering::Release);
    }
}

impl Default for SessionFlag {
    fn default() -> Self {
        Self::new()
    }
}
