//! Button edge task
//!
//! Waits for falling edges on one button and hands them to the
//! debouncer. Runs in interrupt context, so the only work done here is
//! the timestamp and the latch update. Nothing is logged from here;
//! rejected edges are counted by the debouncer and reported by the
//! control loop.

use digitus_core::{Button, InputDebouncer};
use embassy_rp::gpio::Input;
use embassy_time::Instant;

/// One task per button
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(button: Button, mut input: Input<'static>, debouncer: &'static InputDebouncer) {
    loop {
        input.wait_for_falling_edge().await;

        // Wraps after ~49 days, the debouncer compares with wrapping math
        let now_ms = Instant::now().as_millis() as u32;

        debouncer.on_edge(button, now_ms);
    }
}
