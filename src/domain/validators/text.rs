use regex::Regex;

use crate::domain::errors::ValidationError;

/// Rejects empty and whitespace only text.
pub fn not_blank(value: &String) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("You must enter some text"))
    } else {
        Ok(())
    }
}

/// At least `length` characters.
pub fn min_length(length: usize) -> impl Fn(&String) -> Result<(), ValidationError> {
    move |value: &String| {
        if value.chars().count() >= length {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "You must enter at least {length} characters"
            )))
        }
    }
}

/// At most `length` characters.
pub fn max_length(length: usize) -> impl Fn(&String) -> Result<(), ValidationError> {
    move |value: &String| {
        if value.chars().count() <= length {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "You must enter at most {length} characters"
            )))
        }
    }
}

/// Passes when `pattern` matches anywhere in the text, anchor it with `^...$`
/// to require a full match.
pub fn pattern(regex: Regex) -> impl Fn(&String) -> Result<(), ValidationError> {
    move |value: &String| {
        if regex.is_match(value) {
            Ok(())
        } else {
            log::debug!("'{}' does not match pattern '{}'", value, regex);
            Err(ValidationError::new(
                "The text does not match the required format",
            ))
        }
    }
}
