//! Fingerpaint - capacitive touch finger-painting firmware
//!
//! Draws with a finger on a 240x320 ILI9341 panel. A six-color palette
//! across the top selects the pen; anywhere else paints.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::I2c;
use embassy_rp::spi::Spi;
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use fingerpaint_core::config::{DisplayTiming, PanelGeometry};
use fingerpaint_core::{Fault, Painter};
use fingerpaint_drivers::display::{Ili9341, MonoFontGlyphs, Renderer, SpiInterface};
use fingerpaint_drivers::touch::{Ft6206, TouchBus, FT6206_ADDR};
use fingerpaint_hal::{I2cConfig, SpiConfig};
use fingerpaint_hal_rp2040::gpio::RpOutput;
use fingerpaint_hal_rp2040::i2c::{self as rp_i2c, RpI2c};
use fingerpaint_hal_rp2040::spi::{self as rp_spi, RpSpi};

mod board;
mod channels;
mod tasks;

/// Halt on an unrecoverable fault
pub(crate) fn fatal<T>(result: Result<T, Fault>) -> T {
    match result {
        Ok(value) => value,
        Err(fault) => defmt::panic!("Unrecoverable fault: {}", fault),
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Fingerpaint firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Display on SPI0; the panel is the only device, so CS stays asserted
    let _cs = Output::new(p.PIN_17, Level::Low);
    let spi = Spi::new_blocking(
        p.SPI0,
        p.PIN_18,
        p.PIN_19,
        p.PIN_16,
        rp_spi::embassy_config(&SpiConfig::default()),
    );
    let dc = RpOutput::new(Output::new(p.PIN_20, Level::Low));
    let mut rst = RpOutput::new(Output::new(p.PIN_21, Level::High));

    let timing = DisplayTiming::ILI9341;
    let iface = SpiInterface::new(RpSpi::new(spi), dc, Delay, &timing);
    let mut lcd = Ili9341::new(iface, PanelGeometry::PORTRAIT, timing);
    fatal(lcd.init(&mut rst));
    info!("Display initialized");

    // Touch controller on I2C0
    let i2c = I2c::new_blocking(
        p.I2C0,
        p.PIN_5,
        p.PIN_4,
        rp_i2c::embassy_config(&I2cConfig::FAST),
    );
    let touch = Ft6206::new(
        TouchBus::new(RpI2c::new(i2c), FT6206_ADDR),
        PanelGeometry::PORTRAIT,
    );

    let canvas = Renderer::new(lcd, MonoFontGlyphs::default());
    let mut painter: board::App = Painter::new(touch, canvas, Delay);

    fatal(painter.show_splash());
    fatal(painter.probe_touch());
    info!("Touch controller identified");

    let irq = Input::new(p.PIN_6, Pull::Up);
    spawner.spawn(unwrap!(tasks::touch_irq_task(irq)));

    fatal(painter.draw_palette());
    spawner.spawn(unwrap!(tasks::painter_task(painter)));

    info!("All tasks spawned, firmware running");

    // Keeps CS and RST driven; everything else happens in the tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
