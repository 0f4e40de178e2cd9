//! Conversion of raw terminal input into primitive values.
//!
//! Nothing here retries, a failed parse is handed back as an [`InputError`]
//! for the retry loop to report.

use serde::{Deserialize, Serialize};

use crate::domain::{adapters::Key, errors::InputError};

/// Decimal convention used when parsing real numbers.
///
/// Fixed at construction so parsing never depends on process locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            decimal_separator: '.',
        }
    }
}

impl NumberFormat {
    pub fn new(decimal_separator: char) -> Self {
        NumberFormat { decimal_separator }
    }

    pub fn parse_integer(&self, raw: Option<&str>) -> Result<i64, InputError> {
        let raw = raw.ok_or(InputError::EndOfInput)?;

        raw.trim()
            .parse::<i64>()
            .map_err(|_| InputError::invalid_value("You must enter a whole number"))
    }

    pub fn parse_real(&self, raw: Option<&str>) -> Result<f64, InputError> {
        let raw = raw.ok_or(InputError::EndOfInput)?.trim();
        let invalid = || {
            InputError::invalid_value(format!(
                "You must enter a number using '{}' as decimal separator",
                self.decimal_separator
            ))
        };

        // Only the configured separator is accepted.
        if self.decimal_separator != '.' && raw.contains('.') {
            return Err(invalid());
        }

        let normalized = raw.replace(self.decimal_separator, ".");
        let value = normalized.parse::<f64>().map_err(|_| invalid())?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(invalid())
        }
    }
}

/// Any line is valid text, only a closed stream is not.
pub fn parse_text(raw: Option<String>) -> Result<String, InputError> {
    raw.ok_or(InputError::EndOfInput)
}

/// 1-based menu choice, range checks happen later.
pub fn parse_index(raw: Option<&str>) -> Result<i64, InputError> {
    let raw = raw.ok_or(InputError::EndOfInput)?;

    raw.trim()
        .parse::<i64>()
        .map_err(|_| InputError::invalid_value("You must select an option"))
}

/// `true` for the confirm key, `false` for the reject key.
pub fn parse_key(key: Option<Key>, confirm: Key, reject: Key) -> Result<bool, InputError> {
    match key.ok_or(InputError::EndOfInput)? {
        key if key == confirm => Ok(true),
        key if key == reject => Ok(false),
        _ => Err(InputError::InvalidOption),
    }
}
