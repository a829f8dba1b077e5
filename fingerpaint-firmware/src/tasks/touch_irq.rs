//! Touch interrupt edge watcher
//!
//! Never touches the I2C bus: it only records that a touch session
//! started and wakes the painter.

use defmt::*;
use embassy_rp::gpio::Input;

use crate::channels::{TOUCH_SESSION, TOUCH_WAKE};

#[embassy_executor::task]
pub async fn touch_irq_task(mut irq: Input<'static>) {
    info!("Touch IRQ task started");

    loop {
        irq.wait_for_falling_edge().await;
        TOUCH_SESSION.raise();
        TOUCH_WAKE.signal(());
        trace!("Touch edge");
    }
}
