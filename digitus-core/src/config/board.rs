//! Board configuration types

use core::fmt;

use heapless::FnvIndexSet;

use crate::control::DEFAULT_BLINK_HALF_PERIOD_MS;
use crate::input::DEFAULT_DEBOUNCE_MS;
use crate::render::DEFAULT_LATCH_US;

/// GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// WS2812 data line, fixed by board wiring
pub const STRIP_DATA_PIN: u8 = 7;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Same pin assigned to two lines
    DuplicatePin(u8),
    /// Pin is the strip data line
    ReservedPin(u8),
    /// A timing value that must be non-zero is zero
    ZeroInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPin(pin) => write!(f, "GPIO{} does not exist (0-29 valid)", pin),
            ConfigError::DuplicatePin(pin) => write!(f, "GPIO{} is assigned twice", pin),
            ConfigError::ReservedPin(pin) => write!(f, "GPIO{} drives the LED matrix", pin),
            ConfigError::ZeroInterval => write!(f, "timing values must be non-zero"),
        }
    }
}

/// Button inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Button A (increment), active low with pull-up
    pub a_pin: u8,
    /// Button B (decrement), active low with pull-up
    pub b_pin: u8,
    /// Minimum spacing between accepted edges (ms)
    pub debounce_ms: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            a_pin: 5,
            b_pin: 6,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// RGB status LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusLedConfig {
    pub red_pin: u8,
    pub green_pin: u8,
    pub blue_pin: u8,
    /// On time and off time of the blink (ms)
    pub blink_half_period_ms: u32,
}

impl Default for StatusLedConfig {
    fn default() -> Self {
        Self {
            red_pin: 13,
            green_pin: 12,
            blue_pin: 11,
            blink_half_period_ms: DEFAULT_BLINK_HALF_PERIOD_MS,
        }
    }
}

/// LED matrix transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixConfig {
    /// Quiet time after each frame (µs)
    pub latch_us: u32,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            latch_us: DEFAULT_LATCH_US,
        }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    pub buttons: ButtonConfig,
    pub status_led: StatusLedConfig,
    pub matrix: MatrixConfig,
}

impl BoardConfig {
    /// Every configured GPIO, in claim order
    pub fn pins(&self) -> [u8; 5] {
        [
            self.buttons.a_pin,
            self.buttons.b_pin,
            self.status_led.red_pin,
            self.status_led.green_pin,
            self.status_led.blue_pin,
        ]
    }

    /// Check the configuration describes a drivable board
    ///
    /// Each of the five lines needs its own pin, none of them may be
    /// the strip data pin, and none of the intervals may be zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: FnvIndexSet<u8, 8> = FnvIndexSet::new();

        for pin in self.pins() {
            if pin >= GPIO_COUNT {
                return Err(ConfigError::InvalidPin(pin));
            }
            if pin == STRIP_DATA_PIN {
                return Err(ConfigError::ReservedPin(pin));
            }
            // Capacity exceeds the five pins checked here
            if !seen.insert(pin).unwrap_or(false) {
                return Err(ConfigError::DuplicatePin(pin));
            }
        }

        if self.buttons.debounce_ms == 0
            || self.status_led.blink_half_period_ms == 0
            || self.matrix.latch_us == 0
        {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(BoardConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_status_lines_are_distinct() {
        let led = StatusLedConfig::default();
        assert_ne!(led.red_pin, led.green_pin);
        assert_ne!(led.red_pin, led.blue_pin);
        assert_ne!(led.green_pin, led.blue_pin);
    }

    #[test]
    fn test_duplicate_status_pin() {
        let mut config = BoardConfig::default();
        config.status_led.blue_pin = config.status_led.red_pin;
        assert_eq!(config.validate(), Err(ConfigError::DuplicatePin(13)));
    }

    #[test]
    fn test_button_shares_led_pin() {
        let mut config = BoardConfig::default();
        config.buttons.b_pin = 12;
        assert_eq!(config.validate(), Err(ConfigError::DuplicatePin(12)));
    }

    #[test]
    fn test_out_of_range_pin() {
        let mut config = BoardConfig::default();
        config.buttons.a_pin = 30;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPin(30)));
    }

    #[test]
    fn test_strip_pin_is_reserved() {
        let mut config = BoardConfig::default();
        config.status_led.green_pin = STRIP_DATA_PIN;
        assert_eq!(config.validate(), Err(ConfigError::ReservedPin(7)));
    }

    #[test]
    fn test_zero_intervals() {
        let mut config = BoardConfig::default();
        config.buttons.debounce_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));

        let mut config = BoardConfig::default();
        config.status_led.blink_half_period_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn test_zero_latch_rejected() {
        let mut config = BoardConfig::default();
        config.matrix.latch_us = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }
}
