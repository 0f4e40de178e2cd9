use std::fmt::Display;

use crate::domain::errors::ValidationError;

// `T::default()` is zero for every primitive number.
fn zero<T: Default>() -> T {
    T::default()
}

pub fn positive<T: PartialOrd + Default>(value: &T) -> Result<(), ValidationError> {
    if *value > zero() {
        Ok(())
    } else {
        Err(ValidationError::new("You must enter a positive number"))
    }
}

pub fn positive_or_zero<T: PartialOrd + Default>(value: &T) -> Result<(), ValidationError> {
    if *value >= zero() {
        Ok(())
    } else {
        Err(ValidationError::new("You must enter a positive number or zero"))
    }
}

pub fn negative<T: PartialOrd + Default>(value: &T) -> Result<(), ValidationError> {
    if *value < zero() {
        Ok(())
    } else {
        Err(ValidationError::new("You must enter a negative number"))
    }
}

pub fn negative_or_zero<T: PartialOrd + Default>(value: &T) -> Result<(), ValidationError> {
    if *value <= zero() {
        Ok(())
    } else {
        Err(ValidationError::new("You must enter a negative number or zero"))
    }
}

/// Inclusive lower bound.
pub fn min<T>(bound: T) -> impl Fn(&T) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    move |value: &T| {
        if *value >= bound {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "You must enter a number greater than or equal to {bound}"
            )))
        }
    }
}

/// Inclusive upper bound.
pub fn max<T>(bound: T) -> impl Fn(&T) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    move |value: &T| {
        if *value <= bound {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "You must enter a number less than or equal to {bound}"
            )))
        }
    }
}
