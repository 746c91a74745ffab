//! Embassy async tasks
//!
//! Tasks run on the high-priority interrupt executor and only talk to
//! the main loop through the shared debouncer.

pub mod buttons;

pub use buttons::button_task;
