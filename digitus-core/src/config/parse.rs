//! Minimal TOML reader for `board.toml`
//!
//! Handles only the subset the board file uses. It is NOT a general
//! TOML parser.
//!
//! Supported features:
//! - `[section]` headers
//! - `key = value` with non-negative integer values
//! - Comments (`# ...`), whole-line and trailing
//!
//! Keys that are absent keep their defaults. Unknown sections and keys
//! are errors so a typo cannot silently fall back to a default pin.

use core::fmt;

use super::board::BoardConfig;

/// What went wrong on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseErrorKind {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in the current section
    UnknownKey,
    /// Value is not a non-negative integer in range
    InvalidValue,
    /// Line is neither a header nor `key = value`
    Syntax,
}

/// Parse error with its 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ParseErrorKind::InvalidSection => "unknown or malformed section header",
            ParseErrorKind::UnknownKey => "unknown key for this section",
            ParseErrorKind::InvalidValue => "value must be a plain decimal integer",
            ParseErrorKind::Syntax => "expected `[section]` or `key = value`",
        };
        write!(f, "line {}: {}", self.line, what)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Buttons,
    StatusLed,
    Matrix,
}

/// Parse board configuration text
///
/// Does not validate pin assignments; see [`BoardConfig::validate`].
pub fn parse_board_config(input: &str) -> Result<BoardConfig, ParseError> {
    let mut config = BoardConfig::default();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let at = |kind| ParseError {
            line: index + 1,
            kind,
        };
        let line = strip_comment(raw).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            if !line.ends_with(']') {
                return Err(at(ParseErrorKind::InvalidSection));
            }
            section = parse_section_header(&line[1..line.len() - 1])
                .ok_or(at(ParseErrorKind::InvalidSection))?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(at(ParseErrorKind::Syntax))?;
        apply_value(&mut config, section, key, value).map_err(at)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Option<Section> {
    match header.trim() {
        "buttons" => Some(Section::Buttons),
        "status_led" => Some(Section::StatusLed),
        "matrix" => Some(Section::Matrix),
        _ => None,
    }
}

/// Drop a trailing `# comment`
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseErrorKind> {
    value.parse().map_err(|_| ParseErrorKind::InvalidValue)
}

fn apply_value(
    config: &mut BoardConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseErrorKind> {
    match (section, key) {
        (Section::Buttons, "a_pin") => config.buttons.a_pin = parse_int(value)?,
        (Section::Buttons, "b_pin") => config.buttons.b_pin = parse_int(value)?,
        (Section::Buttons, "debounce_ms") => config.buttons.debounce_ms = parse_int(value)?,
        (Section::StatusLed, "red_pin") => config.status_led.red_pin = parse_int(value)?,
        (Section::StatusLed, "green_pin") => config.status_led.green_pin = parse_int(value)?,
        (Section::StatusLed, "blue_pin") => config.status_led.blue_pin = parse_int(value)?,
        (Section::StatusLed, "blink_half_period_ms") => {
            config.status_led.blink_half_period_ms = parse_int(value)?
        }
        (Section::Matrix, "latch_us") => config.matrix.latch_us = parse_int(value)?,
        _ => return Err(ParseErrorKind::UnknownKey),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = r#"
# BitDogLab-style wiring
[buttons]
a_pin = 5
b_pin = 6
debounce_ms = 250   # stiffer buttons

[status_led]
red_pin = 13
green_pin = 11
blue_pin = 12
blink_half_period_ms = 50

[matrix]
latch_us = 100
"#;

    #[test]
    fn test_parse_full_board() {
        let config = parse_board_config(BOARD).unwrap();
        assert_eq!(config.buttons.a_pin, 5);
        assert_eq!(config.buttons.b_pin, 6);
        assert_eq!(config.buttons.debounce_ms, 250);
        assert_eq!(config.status_led.red_pin, 13);
        assert_eq!(config.status_led.green_pin, 11);
        assert_eq!(config.status_led.blue_pin, 12);
        assert_eq!(config.status_led.blink_half_period_ms, 50);
        assert_eq!(config.matrix.latch_us, 100);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_board_config("[buttons]\nb_pin = 9\n").unwrap();
        let defaults = BoardConfig::default();
        assert_eq!(config.buttons.b_pin, 9);
        assert_eq!(config.buttons.a_pin, defaults.buttons.a_pin);
        assert_eq!(config.status_led, defaults.status_led);
        assert_eq!(config.matrix, defaults.matrix);
    }

    #[test]
    fn test_unknown_section() {
        let err = parse_board_config("[buttons]\n\n[heater]\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.kind, ParseErrorKind::InvalidSection);
    }

    #[test]
    fn test_unterminated_section() {
        let err = parse_board_config("[buttons\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidSection);
    }

    #[test]
    fn test_unknown_key() {
        let err = parse_board_config("[matrix]\nwidth = 8\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.kind, ParseErrorKind::UnknownKey);
    }

    #[test]
    fn test_key_outside_section() {
        let err = parse_board_config("a_pin = 5\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownKey);
    }

    #[test]
    fn test_invalid_values() {
        for input in [
            "[buttons]\na_pin = -1\n",
            "[buttons]\na_pin = 256\n",
            "[buttons]\na_pin = \"gpio5\"\n",
            "[matrix]\nlatch_us = 1.5\n",
        ] {
            let err = parse_board_config(input).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::InvalidValue, "{}", input);
        }
    }

    #[test]
    fn test_syntax_error() {
        let err = parse_board_config("[buttons]\na_pin\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Syntax);
        let err = parse_board_config("[buttons]\na_pin =\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Syntax);
    }
}
