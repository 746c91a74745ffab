//! Control loop
//!
//! Owns the displayed digit and the press counters, services pending
//! button flags, and keeps the status LED blinking.

pub mod indicator;
pub mod runner;
pub mod state;

pub use indicator::{StatusIndicator, DEFAULT_BLINK_HALF_PERIOD_MS};
pub use runner::{ControlLoop, PressLog};
pub use state::{CounterState, PressReport};
