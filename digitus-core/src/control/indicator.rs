//! RGB status indicator
//!
//! Three independent output lines. Only the red line blinks; green and
//! blue are driven low at construction and left there.

use digitus_hal::OutputPin;
use embedded_hal::delay::DelayNs;

/// Default on/off time of the heartbeat blink (ms), 5 Hz overall
pub const DEFAULT_BLINK_HALF_PERIOD_MS: u32 = 100;

/// Status LED with a fixed-rate blink on the red channel
pub struct StatusIndicator<P, D> {
    red: P,
    green: P,
    blue: P,
    delay: D,
    half_period_ms: u32,
}

impl<P: OutputPin, D: DelayNs> StatusIndicator<P, D> {
    /// Take the three lines and switch everything off
    pub fn new(mut red: P, mut green: P, mut blue: P, delay: D, half_period_ms: u32) -> Self {
        red.set_low();
        green.set_low();
        blue.set_low();

        Self {
            red,
            green,
            blue,
            delay,
            half_period_ms,
        }
    }

    /// One full blink: on, wait, off, wait
    ///
    /// Blocks for two half periods.
    pub fn blink_once(&mut self) {
        self.red.set_high();
        self.delay.delay_ms(self.half_period_ms);
        self.red.set_low();
        self.delay.delay_ms(self.half_period_ms);
    }

    /// Line states as `(red, green, blue)`
    pub fn levels(&self) -> (bool, bool, bool) {
        (
            self.red.is_set_high(),
            self.green.is_set_high(),
            self.blue.is_set_high(),
        )
    }

    /// Access the delay provider
    pub fn delay(&self) -> &D {
        &self.delay
    }
}
