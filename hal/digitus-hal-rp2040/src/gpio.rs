//! GPIO outputs

use digitus_hal::OutputPin;
use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;

/// Push-pull output driving one status LED line
pub struct StatusPin {
    output: Output<'static>,
}

impl StatusPin {
    /// Configure a pin as an output, initially low
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        Self {
            output: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for StatusPin {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
