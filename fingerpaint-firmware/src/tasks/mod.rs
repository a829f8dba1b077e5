//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod painter;
pub mod touch_irq;

pub use painter::painter_task;
pub use touch_irq::touch_irq_task;
