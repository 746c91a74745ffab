//! Color conversion for WS2812-class LEDs
//!
//! Pixels are described as per-channel percentages and converted to the
//! device's native word: eight bits per channel, green in the most
//! significant byte, then red, then blue.
//!
//! ```text
//!  23      16 15       8 7        0
//! ┌──────────┬──────────┬──────────┐
//! │  green   │   red    │   blue   │
//! └──────────┴──────────┴──────────┘
//! ```

/// Full intensity in percent
pub const MAX_PERCENT: u8 = 100;

/// Full intensity as a device byte
pub const MAX_LEVEL: u8 = 255;

/// Pixel color as three channel percentages in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PercentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PercentColor {
    /// All channels off
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pure red at the given intensity
    pub const fn red(percent: u8) -> Self {
        Self::new(percent, 0, 0)
    }
}

/// Packed GRB word ready for transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceColor(u32);

impl DeviceColor {
    /// LED off
    pub const OFF: Self = Self(0);

    /// Pack device bytes in GRB order
    pub const fn from_levels(r: u8, g: u8, b: u8) -> Self {
        Self(((g as u32) << 16) | ((r as u32) << 8) | b as u32)
    }

    /// The 24-bit word, upper byte zero
    pub const fn word(self) -> u32 {
        self.0
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

/// Convert one channel percentage to a device byte
///
/// Zero maps to exactly zero. Anything else is `round(255 * p / 100)`
/// with percentages above 100 treated as 100.
pub const fn channel_level(percent: u8) -> u8 {
    if percent == 0 {
        return 0;
    }
    let clamped = if percent > MAX_PERCENT {
        MAX_PERCENT
    } else {
        percent
    };
    let scaled = MAX_LEVEL as u32 * clamped as u32 + MAX_PERCENT as u32 / 2;
    (scaled / MAX_PERCENT as u32) as u8
}

/// Encode channel percentages into a packed device word
pub const fn encode(percent_r: u8, percent_g: u8, percent_b: u8) -> DeviceColor {
    DeviceColor::from_levels(
        channel_level(percent_r),
        channel_level(percent_g),
        channel_level(percent_b),
    )
}

impl From<PercentColor> for DeviceColor {
    fn from(color: PercentColor) -> Self {
        encode(color.r, color.g, color.b)
    }
}

/// Encode a whole frame, cell by cell
pub fn encode_frame<const N: usize>(frame: &[PercentColor; N]) -> [DeviceColor; N] {
    core::array::from_fn(|i| DeviceColor::from(frame[i]))
}
