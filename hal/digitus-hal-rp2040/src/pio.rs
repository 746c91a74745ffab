//! WS2812 bit timing for the PIO transmitter
//!
//! Every data bit is one fixed-length PIO loop of `CYCLES_PER_BIT` state
//! machine cycles, split into three phases:
//!
//! ```text
//!          T1      T2        T3
//!        ┌─────┬──────────┐
//! "1"    │     │          │
//!   ─────┘     │          └─────────
//!        ┌─────┐
//! "0"    │     │
//!   ─────┘     └────────────────────
//! ```
//!
//! The clock divider is chosen so the loop runs at 800 kHz.

use fixed::types::U24F8;

/// System clock frequency (RP2040 default)
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// WS2812 bit rate in Hz
pub const BIT_RATE_HZ: u32 = 800_000;

/// Cycles the line is high for both symbols
pub const T1: u8 = 2;

/// Additional high cycles for a "1"
pub const T2: u8 = 5;

/// Low tail of every bit
pub const T3: u8 = 3;

/// State machine cycles per transmitted bit
pub const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;

/// Bits per LED word (GRB, 8 bits each)
pub const BITS_PER_WORD: u32 = 24;

/// Time to shift one LED word out (µs)
pub const WORD_TIME_US: u32 = BITS_PER_WORD * 1_000_000 / BIT_RATE_HZ;

/// Calculate the clock divider for a given system clock
///
/// divider = SYS_CLK / (BIT_RATE * CYCLES_PER_BIT)
///
/// Returns (integer_part, fractional_part) for the 16.8 fixed-point divider.
pub fn calc_clock_divider(sys_clk_hz: u32) -> (u16, u8) {
    let cycle_hz = (BIT_RATE_HZ * CYCLES_PER_BIT) as u64;
    let divider_x256 = (sys_clk_hz as u64 * 256) / cycle_hz;

    let int_part = (divider_x256 / 256).clamp(1, 0xFFFF) as u16;
    let frac_part = if int_part as u64 == divider_x256 / 256 {
        (divider_x256 % 256) as u8
    } else {
        0
    };

    (int_part, frac_part)
}

/// Clock divider in the form the state machine config takes
pub fn clock_divider(sys_clk_hz: u32) -> U24F8 {
    let (int_div, frac_div) = calc_clock_divider(sys_clk_hz);
    U24F8::from_bits(((int_div as u32) << 8) | (frac_div as u32))
}
