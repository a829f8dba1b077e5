//! The paint loop
//!
//! [`Painter`] owns the touch sensor, the canvas and the pen. The
//! firmware calls [`Painter::step`] forever; the only input from outside
//! is the [`SessionFlag`] raised by the touch interrupt edge.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use embedded_hal::delay::DelayNs;

use crate::config::{splash, UiTiming, BOX_SIZE};
use crate::fault::Fault;
use crate::palette::{PenColor, HIGHLIGHT};
use crate::session::SessionFlag;
use crate::state::{Event, State};
use crate::touch::{TouchFrame, TouchPoint};
use crate::traits::{Canvas, CanvasExt, TouchSensor};

/// What one loop iteration did, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    /// The touch controller was read this iteration
    pub decoded: bool,
    /// This iteration armed the paint loop
    pub activated: bool,
    /// Pen chosen from the palette, if any
    pub selected: Option<PenColor>,
    /// Brush squares painted
    pub dabs: u8,
    /// The session flag was cleared (finger lifted)
    pub released: bool,
}

/// Paint loop context
pub struct Painter<T, C, D> {
    touch: T,
    canvas: C,
    delay: D,
    timing: UiTiming,
    state: State,
    pen: PenColor,
    frame: TouchFrame,
}

impl<T, C, D> Painter<T, C, D>
where
    T: TouchSensor,
    C: Canvas,
    D: DelayNs,
{
    /// Create an unarmed painter with the default red pen
    pub fn new(touch: T, canvas: C, delay: D) -> Self {
        Self::with_timing(touch, canvas, delay, UiTiming::default())
    }

    /// Create an unarmed painter with custom UI delays
    pub fn with_timing(touch: T, canvas: C, delay: D, timing: UiTiming) -> Self {
        Self {
            touch,
            canvas,
            delay,
            timing,
            state: State::Unarmed,
            pen: PenColor::default(),
            frame: TouchFrame::new(),
        }
    }

    /// Current loop state
    pub fn state(&self) -> State {
        self.state
    }

    /// Current pen
    pub fn pen(&self) -> PenColor {
        self.pen
    }

    /// Touch data from the most recent decode
    pub fn frame(&self) -> &TouchFrame {
        &self.frame
    }

    /// Black screen with the title and the prompt
    pub fn show_splash(&mut self) -> Result<(), Fault> {
        self.canvas.clear_screen()?;
        let (x, y) = splash::TITLE_POS;
        self.canvas
            .print(x, y, Rgb565::RED, format_args!("{}", splash::TITLE))?;
        let (x, y) = splash::PROMPT_POS;
        self.canvas
            .print(x, y, Rgb565::WHITE, format_args!("{}", splash::PROMPT))
    }

    /// Verify the touch controller is present and answering
    pub fn probe_touch(&mut self) -> Result<(), Fault> {
        self.touch.identify()
    }

    /// Draw the pen boxes
    pub fn draw_palette(&mut self) -> Result<(), Fault> {
        self.canvas.draw_palette()
    }

    /// Run one iteration of the paint loop
    pub fn step(&mut self, session: &SessionFlag) -> Result<StepReport, Fault> {
        let mut report = StepReport::default();

        if session.is_raised() {
            self.touch.read_touch_points(&mut self.frame)?;
            report.decoded = true;

            let next = self.state.transition(Event::TouchDetected);
            if next != self.state {
                self.state = next;
                self.activate()?;
                report.activated = true;
                return Ok(report);
            }
        }

        let frame = self.frame;
        let painting: &[TouchPoint] = if self.state.paint_allowed() {
            frame.active()
        } else {
            &[]
        };
        for point in painting.iter().filter(|p| p.touched) {
            if point.y < BOX_SIZE {
                let pen = PenColor::at(point.x);
                self.select_pen(pen)?;
                report.selected = Some(pen);
                self.delay.delay_ms(self.timing.palette_debounce_ms);
                continue;
            }

            self.canvas.dab(point.x, point.y, self.pen.color())?;
            report.dabs = report.dabs.saturating_add(1);
        }

        if report.decoded && !frame.any_touched() {
            session.clear();
            report.released = true;
        }

        self.frame.reset();
        Ok(report)
    }

    /// Consume the painter, returning its parts
    pub fn release(self) -> (T, C, D) {
        (self.touch, self.canvas, self.delay)
    }

    fn activate(&mut self) -> Result<(), Fault> {
        self.canvas.clear_screen()?;
        self.canvas.draw_palette()?;
        self.pen = PenColor::Red;
        self.canvas.mark_pen(self.pen, HIGHLIGHT)?;
        self.delay.delay_ms(self.timing.activation_settle_ms);
        Ok(())
    }

    fn select_pen(&mut self, pen: PenColor) -> Result<(), Fault> {
        let old = self.pen;
        self.canvas.mark_pen(old, old.color())?;
        self.pen = pen;
        self.canvas.mark_pen(pen, HIGHLIGHT)
    }
}
