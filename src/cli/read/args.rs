use std::fmt::Display;

use clap::{Args, ValueEnum};
use regex::Regex;

use crate::domain::{
    errors::ValidationError,
    validators::{numeric, text, Validators},
};

/// Sign constraint shared by the numeric prompts.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Sign {
    Positive,
    PositiveOrZero,
    Negative,
    NegativeOrZero,
}

impl Sign {
    pub fn validator<T>(self) -> fn(&T) -> Result<(), ValidationError>
    where
        T: PartialOrd + Default,
    {
        match self {
            Sign::Positive => numeric::positive,
            Sign::PositiveOrZero => numeric::positive_or_zero,
            Sign::Negative => numeric::negative,
            Sign::NegativeOrZero => numeric::negative_or_zero,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct TextArguments {
    /// Prompt shown before reading.
    pub message: String,

    /// Reject empty or whitespace only answers.
    #[clap(long)]
    pub not_blank: bool,

    /// Minimum number of characters.
    #[clap(long)]
    pub min_length: Option<usize>,

    /// Maximum number of characters.
    #[clap(long)]
    pub max_length: Option<usize>,

    /// Regular expression the answer must match somewhere.
    #[clap(long, value_parser = parse_pattern)]
    pub pattern: Option<Regex>,
}

fn parse_pattern(value: &str) -> Result<Regex, regex::Error> {
    Regex::new(value)
}

impl TextArguments {
    pub fn validators(&self) -> Validators<String> {
        let mut rules = Validators::new();

        if self.not_blank {
            rules = rules.with(text::not_blank);
        }
        if let Some(length) = self.min_length {
            rules = rules.with(text::min_length(length));
        }
        if let Some(length) = self.max_length {
            rules = rules.with(text::max_length(length));
        }
        if let Some(pattern) = &self.pattern {
            rules = rules.with(text::pattern(pattern.clone()));
        }

        rules
    }
}

#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct IntArguments {
    /// Prompt shown before reading.
    pub message: String,

    /// Smallest accepted value, inclusive.
    #[clap(long, allow_hyphen_values = true)]
    pub min: Option<i64>,

    /// Largest accepted value, inclusive.
    #[clap(long, allow_hyphen_values = true)]
    pub max: Option<i64>,

    #[clap(value_enum, long)]
    pub sign: Option<Sign>,
}

impl IntArguments {
    pub fn validators(&self) -> Validators<i64> {
        number_rules(self.sign, self.min, self.max)
    }
}

#[derive(Debug, Args, Clone, PartialEq)]
pub struct RealArguments {
    /// Prompt shown before reading.
    pub message: String,

    /// Smallest accepted value, inclusive.
    #[clap(long, allow_hyphen_values = true)]
    pub min: Option<f64>,

    /// Largest accepted value, inclusive.
    #[clap(long, allow_hyphen_values = true)]
    pub max: Option<f64>,

    #[clap(value_enum, long)]
    pub sign: Option<Sign>,
}

impl RealArguments {
    pub fn validators(&self) -> Validators<f64> {
        number_rules(self.sign, self.min, self.max)
    }
}

fn number_rules<T>(sign: Option<Sign>, min: Option<T>, max: Option<T>) -> Validators<T>
where
    T: PartialOrd + Default + Display + 'static,
{
    let mut rules = Validators::new();

    if let Some(sign) = sign {
        rules = rules.with(sign.validator::<T>());
    }
    if let Some(min) = min {
        rules = rules.with(numeric::min(min));
    }
    if let Some(max) = max {
        rules = rules.with(numeric::max(max));
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_args() -> TextArguments {
        TextArguments {
            message: "Name".into(),
            not_blank: false,
            min_length: None,
            max_length: None,
            pattern: None,
        }
    }

    #[test]
    fn no_flags_means_no_rules() {
        assert!(text_args().validators().is_empty());
    }

    #[test]
    fn text_flags_build_rules_in_order() -> anyhow::Result<()> {
        let args = TextArguments {
            not_blank: true,
            max_length: Some(4),
            pattern: Some(Regex::new("^[a-z]+$")?),
            ..text_args()
        };

        let rules = args.validators();

        assert_eq!(rules.len(), 3);
        assert_eq!(
            rules.check(&"  ".to_string()).unwrap_err().message,
            "You must enter some text"
        );
        assert_eq!(
            rules.check(&"abcdef".to_string()).unwrap_err().message,
            "You must enter at most 4 characters"
        );
        assert!(rules.check(&"abc".to_string()).is_ok());

        Ok(())
    }

    #[test]
    fn sign_and_bounds_combine() {
        let args = IntArguments {
            message: "Age".into(),
            min: None,
            max: Some(120),
            sign: Some(Sign::Positive),
        };

        let rules = args.validators();

        assert!(rules.check(&0).is_err());
        assert!(rules.check(&121).is_err());
        assert!(rules.check(&120).is_ok());
    }

    #[test]
    fn real_bounds_are_inclusive() {
        let args = RealArguments {
            message: "Price".into(),
            min: Some(0.5),
            max: Some(2.5),
            sign: None,
        };

        let rules = args.validators();

        assert!(rules.check(&0.5).is_ok());
        assert!(rules.check(&2.5).is_ok());
        assert!(rules.check(&0.25).is_err());
    }
}
