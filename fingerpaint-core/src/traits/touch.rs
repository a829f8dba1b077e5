//! Touch sensor trait

use crate::fault::Fault;
use crate::touch::TouchFrame;

/// A capacitive touch controller
pub trait TouchSensor {
    /// Verify the controller's identity and put it into polling mode
    fn identify(&mut self) -> Result<(), Fault>;

    /// Decode the current touch state into `frame`
    ///
    /// Overwrites the slots the controller reports and sets the frame's
    /// count; slots past the count are left as they were.
    fn read_touch_points(&mut self, frame: &mut TouchFrame) -> Result<(), Fault>;
}
