//! Paint loop task
//!
//! Runs [`Painter::step`](fingerpaint_core::Painter::step) forever. While
//! a touch session is open it yields between iterations; otherwise it
//! sleeps until the next touch edge.

use defmt::*;
use embassy_futures::yield_now;

use crate::board::App;
use crate::channels::{TOUCH_SESSION, TOUCH_WAKE};
use crate::fatal;

#[embassy_executor::task]
pub async fn painter_task(mut painter: App) {
    info!("Painter task started");

    loop {
        let report = fatal(painter.step(&TOUCH_SESSION));

        if report.activated {
            info!("First touch, canvas ready");
        }
        if let Some(pen) = report.selected {
            info!("Pen selected: {}", pen);
        }
        if report.dabs > 0 {
            trace!("Painted {} dab(s)", report.dabs);
        }
        if report.released {
            debug!("Touch session ended");
        }

        if TOUCH_SESSION.is_raised() {
            yield_now().await;
        } else {
            TOUCH_WAKE.wait().await;
        }
    }
}
