//! State machine for the paint loop
//!
//! The loop starts unarmed behind the splash screen and arms on the
//! first touch. Once armed it never returns to the splash screen.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
