//! Press diagnostics over RTT
//!
//! Records are emitted from the control loop in thread mode.

use defmt::{info, trace};
use digitus_core::{PressLog, PressReport};

/// Reports each accepted press as two defmt records
pub struct DefmtPressLog;

impl PressLog for DefmtPressLog {
    fn record(&mut self, report: &PressReport) {
        info!("Digit: {}", report.digit);
        info!("Button {} presses: {}", report.button, report.presses);
        trace!("Button {} bounces rejected: {}", report.button, report.bounces);
    }
}
