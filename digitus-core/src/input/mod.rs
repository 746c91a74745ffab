//! Button input
//!
//! Edges arrive in interrupt context and are reduced to one pending flag
//! per button; the control loop consumes the flags from thread context.

pub mod button;
pub mod debounce;

pub use button::Button;
pub use debounce::{ButtonLatch, EdgeOutcome, InputDebouncer, DEFAULT_DEBOUNCE_MS};
