//! Edge debouncer
//!
//! The only state shared between the interrupt context (edge tasks) and
//! the control loop. Each button owns a latch: a pending flag and the
//! time of the last accepted edge.
//!
//! - The edge handler is the sole writer of `last_accepted_ms`.
//! - The pending flag is set with `Release` by the edge handler and
//!   read-and-cleared with a single `Acquire` swap by the control loop.
//! - A second accepted press before the loop consumes the first is
//!   coalesced: the flag is a latch, not a counter.
//! - Rejected edges are only counted. The control loop reports the
//!   count, so nothing is logged from interrupt context.
//!
//! Timestamps are wrapping `u32` milliseconds since boot.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use super::button::Button;

/// Default debounce window (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 200;

/// What the debouncer did with an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Edge accepted, pending flag set
    Accepted,
    /// Edge inside the debounce window, discarded
    Bounced,
}

/// Per-button pending flag, last accepted timestamp and bounce count
#[derive(Debug)]
pub struct ButtonLatch {
    pending: AtomicBool,
    last_accepted_ms: AtomicU32,
    bounces: AtomicU32,
}

impl ButtonLatch {
    /// Create a latch with no pending press and a timestamp of zero
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            last_accepted_ms: AtomicU32::new(0),
            bounces: AtomicU32::new(0),
        }
    }
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Debouncer for both buttons
///
/// Lives in a `StaticCell` on target and is shared by reference; all
/// methods take `&self`.
#[derive(Debug)]
pub struct InputDebouncer {
    window_ms: u32,
    latches: [ButtonLatch; Button::COUNT],
}

impl InputDebouncer {
    /// Create a debouncer
    ///
    /// Edges for the same button are accepted only when strictly more
    /// than `window_ms` after the previous accepted one.
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            latches: [ButtonLatch::new(), ButtonLatch::new()],
        }
    }

    /// Debounce window in milliseconds
    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Handle a falling edge
    ///
    /// Runs in interrupt context: never blocks, allocates or logs.
    pub fn on_edge(&self, button: Button, timestamp_ms: u32) -> EdgeOutcome {
        let latch = self.latch(button);
        let last = latch.last_accepted_ms.load(Ordering::Relaxed);

        if timestamp_ms.wrapping_sub(last) > self.window_ms {
            latch.last_accepted_ms.store(timestamp_ms, Ordering::Relaxed);
            latch.pending.store(true, Ordering::Release);
            EdgeOutcome::Accepted
        } else {
            latch.bounces.fetch_add(1, Ordering::Relaxed);
            EdgeOutcome::Bounced
        }
    }

    /// Consume a pending press
    ///
    /// Returns `true` at most once per accepted edge (or coalesced group
    /// of edges).
    pub fn take(&self, button: Button) -> bool {
        self.latch(button).pending.swap(false, Ordering::Acquire)
    }

    /// Check for a pending press without consuming it
    pub fn is_pending(&self, button: Button) -> bool {
        self.latch(button).pending.load(Ordering::Acquire)
    }

    /// Timestamp of the last accepted edge
    pub fn last_accepted_ms(&self, button: Button) -> u32 {
        self.latch(button).last_accepted_ms.load(Ordering::Relaxed)
    }

    /// Edges rejected since boot, wrapping
    pub fn bounces(&self, button: Button) -> u32 {
        self.latch(button).bounces.load(Ordering::Relaxed)
    }

    fn latch(&self, button: Button) -> &ButtonLatch {
        &self.latches[button.index()]
    }
}

impl Default for InputDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_press_after_window() {
        let d = InputDebouncer::default();
        assert_eq!(d.on_edge(Button::A, 1_000), EdgeOutcome::Accepted);
        assert!(d.take(Button::A));
        assert!(!d.take(Button::A));
    }

    #[test]
    fn test_press_right_after_boot_is_dropped() {
        let d = InputDebouncer::default();
        assert_eq!(d.on_edge(Button::A, 150), EdgeOutcome::Bounced);
        assert_eq!(d.on_edge(Button::A, 200), EdgeOutcome::Bounced);
        assert_eq!(d.on_edge(Button::A, 201), EdgeOutcome::Accepted);
    }

    #[test]
    fn test_bounce_within_window() {
        let d = InputDebouncer::default();
        assert_eq!(d.on_edge(Button::B, 1_000), EdgeOutcome::Accepted);
        assert_eq!(d.on_edge(Button::B, 1_005), EdgeOutcome::Bounced);
        assert_eq!(d.on_edge(Button::B, 1_200), EdgeOutcome::Bounced);
        assert_eq!(d.last_accepted_ms(Button::B), 1_000);
        assert_eq!(d.on_edge(Button::B, 1_201), EdgeOutcome::Accepted);
        assert_eq!(d.last_accepted_ms(Button::B), 1_201);
    }

    #[test]
    fn test_window_measured_from_accepted_edge() {
        let d = InputDebouncer::default();
        d.on_edge(Button::A, 1_000);
        // Rejected edges do not push the window forward
        d.on_edge(Button::A, 1_150);
        assert_eq!(d.on_edge(Button::A, 1_250), EdgeOutcome::Accepted);
    }

    #[test]
    fn test_buttons_are_independent() {
        let d = InputDebouncer::default();
        assert_eq!(d.on_edge(Button::A, 1_000), EdgeOutcome::Accepted);
        assert_eq!(d.on_edge(Button::B, 1_010), EdgeOutcome::Accepted);
        assert!(d.is_pending(Button::A));
        assert!(d.take(Button::B));
        assert!(d.is_pending(Button::A));
        assert!(!d.is_pending(Button::B));
    }

    #[test]
    fn test_second_press_coalesces() {
        let d = InputDebouncer::default();
        d.on_edge(Button::A, 1_000);
        d.on_edge(Button::A, 2_000);
        assert!(d.take(Button::A));
        assert!(!d.take(Button::A));
    }

    #[test]
    fn test_timestamp_wraparound() {
        let d = InputDebouncer::default();
        d.on_edge(Button::A, u32::MAX - 50);
        assert!(d.take(Button::A));
        // 100 ms later across the wrap: still inside the window
        assert_eq!(d.on_edge(Button::A, 49), EdgeOutcome::Bounced);
        // 251 ms later across the wrap
        assert_eq!(d.on_edge(Button::A, 200), EdgeOutcome::Accepted);
    }

    #[test]
    fn test_bounces_are_counted_per_button() {
        let d = InputDebouncer::default();
        d.on_edge(Button::A, 100);
        d.on_edge(Button::A, 1_000);
        d.on_edge(Button::A, 1_003);
        d.on_edge(Button::A, 1_150);
        d.on_edge(Button::B, 1_000);
        assert_eq!(d.bounces(Button::A), 3);
        assert_eq!(d.bounces(Button::B), 0);
    }

    #[test]
    fn test_custom_window() {
        let d = InputDebouncer::new(50);
        assert_eq!(d.window_ms(), 50);
        d.on_edge(Button::A, 1_000);
        assert_eq!(d.on_edge(Button::A, 1_051), EdgeOutcome::Accepted);
    }
}
