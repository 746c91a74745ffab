//! Digit and press counter state

use crate::digit::Digit;
use crate::input::Button;

/// Diagnostic record for one accepted press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressReport {
    /// Button that was pressed
    pub button: Button,
    /// Digit displayed after the press
    pub digit: Digit,
    /// Cumulative presses of this button, including this one
    pub presses: u32,
    /// Edges of this button rejected by the debouncer since boot
    pub bounces: u32,
}

/// Displayed digit plus per-button press counts
#[derive(Debug, Clone, Default)]
pub struct CounterState {
    digit: Digit,
    presses: [u32; Button::COUNT],
}

impl CounterState {
    /// Start at zero with no presses
    pub fn new() -> Self {
        Self::default()
    }

    /// Current digit
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// Presses counted for a button
    pub fn presses(&self, button: Button) -> u32 {
        self.presses[button.index()]
    }

    /// Count a press and step the digit
    ///
    /// `bounces` is left at zero; the state does not see rejected edges.
    pub fn apply(&mut self, button: Button) -> PressReport {
        let count = &mut self.presses[button.index()];
        *count = count.saturating_add(1);
        self.digit = button.step(self.digit);

        PressReport {
            button,
            digit: self.digit,
            presses: *count,
            bounces: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CounterState::new();
        assert_eq!(state.digit(), Digit::ZERO);
        assert_eq!(state.presses(Button::A), 0);
        assert_eq!(state.presses(Button::B), 0);
    }

    #[test]
    fn test_apply_reports_new_values() {
        let mut state = CounterState::new();
        let report = state.apply(Button::A);
        assert_eq!(report.button, Button::A);
        assert_eq!(report.digit.value(), 1);
        assert_eq!(report.presses, 1);

        let report = state.apply(Button::B);
        assert_eq!(report.digit, Digit::ZERO);
        assert_eq!(report.presses, 1);
        assert_eq!(state.presses(Button::A), 1);
    }

    #[test]
    fn test_decrement_from_zero_wraps() {
        let mut state = CounterState::new();
        assert_eq!(state.apply(Button::B).digit.value(), 9);
    }
}
