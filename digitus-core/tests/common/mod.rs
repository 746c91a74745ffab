//! Host-side stand-ins for the board peripherals

#![allow(dead_code)]

use digitus_core::control::{ControlLoop, StatusIndicator};
use digitus_core::render::{MatrixRenderer, DEFAULT_LATCH_US};
use digitus_core::{InputDebouncer, PressLog, PressReport, MATRIX_CELLS};
use digitus_hal::{OutputPin, PixelSink};
use embedded_hal::delay::DelayNs;

/// Strip that groups pushed words into frames at every flush
#[derive(Debug, Default)]
pub struct FrameSink {
    pub frames: Vec<Vec<u32>>,
    pending: Vec<u32>,
}

impl FrameSink {
    /// Words pushed since the last flush
    pub fn unflushed(&self) -> &[u32] {
        &self.pending
    }
}

impl PixelSink for FrameSink {
    fn frame_len(&self) -> usize {
        MATRIX_CELLS
    }

    fn put_blocking(&mut self, word: u32) {
        self.pending.push(word);
    }

    fn flush(&mut self) {
        self.frames.push(core::mem::take(&mut self.pending));
    }
}

/// Delay that only records how long it was asked to wait
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
    pub rises: u32,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        if !self.high {
            self.rises += 1;
        }
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Keeps every press report in order
#[derive(Debug, Default)]
pub struct ReportLog {
    pub reports: Vec<PressReport>,
}

impl PressLog for ReportLog {
    fn record(&mut self, report: &PressReport) {
        self.reports.push(*report);
    }
}

pub type TestLoop<'a> = ControlLoop<'a, FrameSink, MockPin, RecordingDelay, ReportLog>;

/// Control loop wired to mocks with the default timings
pub fn control_loop(debouncer: &InputDebouncer) -> TestLoop<'_> {
    let renderer = MatrixRenderer::new(
        FrameSink::default(),
        RecordingDelay::default(),
        DEFAULT_LATCH_US,
    )
    .unwrap();
    let indicator = StatusIndicator::new(
        MockPin::default(),
        MockPin::default(),
        MockPin::default(),
        RecordingDelay::default(),
        1,
    );
    ControlLoop::new(debouncer, renderer, indicator, ReportLog::default())
}
