//! Board configuration
//!
//! Pin assignment and timing, read from `board.toml` at startup. The
//! WS2812 data pin is not configurable: the PIO driver needs it as a
//! typed pin, so it is reserved by board wiring.

pub mod board;
pub mod parse;

pub use board::*;
pub use parse::{parse_board_config, ParseError, ParseErrorKind};

/// Board configuration could not be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadError {
    /// Text is not valid board TOML
    Parse(ParseError),
    /// Values parsed but describe an impossible board
    Invalid(ConfigError),
}

impl core::fmt::Display for LoadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LoadError::Parse(e) => write!(f, "{}", e),
            LoadError::Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl From<ParseError> for LoadError {
    fn from(e: ParseError) -> Self {
        LoadError::Parse(e)
    }
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Invalid(e)
    }
}

/// Parse and validate board configuration text
pub fn load_board_config(input: &str) -> Result<BoardConfig, LoadError> {
    let config = parse_board_config(input)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rejects_invalid_board() {
        let input = "[buttons]\na_pin = 7\n";
        assert_eq!(
            load_board_config(input),
            Err(LoadError::Invalid(ConfigError::ReservedPin(7)))
        );
    }

    #[test]
    fn test_load_reports_parse_error() {
        let result = load_board_config("[nope]\n");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_load_defaults() {
        assert_eq!(load_board_config(""), Ok(BoardConfig::default()));
    }
}
