//! Board-agnostic core logic for the digit counter firmware
//!
//! This crate contains the whole input/output pipeline that does not
//! depend on a specific chip:
//!
//! - Percentage color to device color packing (GRB)
//! - Digit glyph table for the 5x5 matrix
//! - Matrix renderer driving a [`digitus_hal::PixelSink`]
//! - Edge debouncer shared between interrupt and main context
//! - Control loop owning the displayed digit and the status blink
//! - Board configuration types and parser

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod control;
pub mod digit;
pub mod glyph;
pub mod input;
pub mod render;

pub use color::{DeviceColor, PercentColor};
pub use control::{ControlLoop, PressLog, PressReport, StatusIndicator};
pub use digit::Digit;
pub use glyph::{mask_for, GlyphMask, MATRIX_CELLS};
pub use input::{Button, EdgeOutcome, InputDebouncer};
pub use render::{MatrixRenderer, RenderError};
