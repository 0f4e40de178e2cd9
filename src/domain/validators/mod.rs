//! Composable rules checked against an already parsed value.
//!
//! A [`Validator`] is anything that inspects a `&T` and either accepts it or
//! rejects it with a [`ValidationError`]. Plain functions and closures with the
//! signature `Fn(&T) -> Result<(), ValidationError>` qualify, so the builders
//! in [`numeric`] and [`text`] return closures.
//!
//! ```rust
//! use console_kit::domain::validators::{numeric, Validators};
//!
//! let rules: Validators<i64> = Validators::new()
//!     .with(numeric::positive)
//!     .with(numeric::max(10));
//!
//! assert!(rules.check(&5).is_ok());
//! assert!(rules.check(&11).is_err());
//! ```

pub mod numeric;
pub mod text;

use crate::domain::errors::ValidationError;

pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T) -> Result<(), ValidationError>;
}

impl<T: ?Sized, F> Validator<T> for F
where
    F: Fn(&T) -> Result<(), ValidationError>,
{
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        self(value)
    }
}

/// Ordered chain of validators, built once and reused across prompts.
pub struct Validators<T: ?Sized> {
    rules: Vec<Box<dyn Validator<T>>>,
}

impl<T: ?Sized> Validators<T> {
    pub fn new() -> Self {
        Validators { rules: Vec::new() }
    }

    #[must_use]
    pub fn with<V>(mut self, rule: V) -> Self
    where
        V: Validator<T> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Runs every rule in declaration order, stopping at the first rejection.
    pub fn check(&self, value: &T) -> Result<(), ValidationError> {
        for rule in &self.rules {
            rule.validate(value)?;
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized> Default for Validators<T> {
    fn default() -> Self {
        Self::new()
    }
}
