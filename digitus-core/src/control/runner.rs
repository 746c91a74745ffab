//! The main-context loop
//!
//! Runs forever in thread mode. Each pass blinks the status LED once,
//! then services button A and button B in that order. Both buttons are
//! handled in the same pass when both are pending, and A's step is
//! rendered before B's.

use digitus_hal::{OutputPin, PixelSink};
use embedded_hal::delay::DelayNs;

use super::indicator::StatusIndicator;
use super::state::{CounterState, PressReport};
use crate::digit::Digit;
use crate::input::{Button, InputDebouncer};
use crate::render::MatrixRenderer;

/// Sink for press diagnostics
///
/// Called once per accepted press, before the new digit is rendered.
pub trait PressLog {
    fn record(&mut self, report: &PressReport);
}

/// Digit counter control loop
pub struct ControlLoop<'a, S, P, D, L> {
    debouncer: &'a InputDebouncer,
    state: CounterState,
    renderer: MatrixRenderer<S, D>,
    indicator: StatusIndicator<P, D>,
    log: L,
}

impl<'a, S, P, D, L> ControlLoop<'a, S, P, D, L>
where
    S: PixelSink,
    P: OutputPin,
    D: DelayNs,
    L: PressLog,
{
    pub fn new(
        debouncer: &'a InputDebouncer,
        renderer: MatrixRenderer<S, D>,
        indicator: StatusIndicator<P, D>,
        log: L,
    ) -> Self {
        Self {
            debouncer,
            state: CounterState::new(),
            renderer,
            indicator,
            log,
        }
    }

    /// Run forever
    pub fn run(mut self) -> ! {
        loop {
            self.run_once();
        }
    }

    /// One pass: blink, then service both buttons
    pub fn run_once(&mut self) {
        self.indicator.blink_once();
        self.service_buttons();
    }

    /// Consume pending presses without blinking
    ///
    /// Returns the number of presses handled (0, 1 or 2).
    pub fn service_buttons(&mut self) -> u8 {
        let mut handled = 0;
        for button in Button::ALL {
            if self.debouncer.take(button) {
                let report = PressReport {
                    bounces: self.debouncer.bounces(button),
                    ..self.state.apply(button)
                };
                self.log.record(&report);
                self.renderer.render_digit(report.digit);
                handled += 1;
            }
        }
        handled
    }

    /// Currently displayed digit
    pub fn digit(&self) -> Digit {
        self.state.digit()
    }

    /// Presses counted for a button
    pub fn presses(&self, button: Button) -> u32 {
        self.state.presses(button)
    }

    pub fn renderer(&self) -> &MatrixRenderer<S, D> {
        &self.renderer
    }

    pub fn indicator(&self) -> &StatusIndicator<P, D> {
        &self.indicator
    }

    pub fn log(&self) -> &L {
        &self.log
    }
}
