//! Digitus Hardware Abstraction Layer
//!
//! This crate defines the hardware seams the digit counter logic is
//! written against. Chip-specific HALs implement them; host tests
//! implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  digitus-core (renderer, control loop)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  digitus-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ digitus-hal-  │       │  test mocks   │
//! │    rp2040     │       │  (host only)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Status indicator lines
//! - [`strip::PixelSink`] - Serial word transport to addressable LEDs
//!
//! Timed waits use `embedded_hal::delay::DelayNs` directly and are not
//! redefined here.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod strip;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use strip::PixelSink;
