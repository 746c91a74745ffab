//! RP2040-specific HAL for the digit counter firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `digitus-hal` traits:
//!
//! - Dynamic pin allocation for config-driven setup
//! - Push-pull status outputs (implements `digitus_hal::OutputPin`)
//! - PIO-based WS2812 transmitter (implements `digitus_hal::PixelSink`)

#![no_std]

pub mod gpio;
pub mod pins;
pub mod pio;
pub mod ws2812;

pub use gpio::StatusPin;
pub use pins::{PinBank, PinError, RemainingPeripherals};
pub use ws2812::PioWs2812;
