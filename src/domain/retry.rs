use crate::domain::{
    errors::{Errors, InputError},
    validators::Validators,
};

/// Where the retry loop reports rejected attempts.
pub trait Feedback {
    fn warning(&mut self, message: &str) -> Result<(), Errors>;
}

/// Reads with `produce` until a value passes every validator.
///
/// Parse failures, invalid options and validator rejections are reported
/// through [`Feedback::warning`] and the prompt is asked again with no upper
/// bound. A closed input stream or a terminal failure ends the loop with an
/// error instead, so piped input can never spin forever.
pub fn get_value_or_repeat<C, T, P>(
    context: &mut C,
    mut produce: P,
    validators: &Validators<T>,
) -> Result<T, Errors>
where
    C: Feedback,
    P: FnMut(&mut C) -> Result<T, InputError>,
{
    let mut attempt: usize = 0;

    loop {
        attempt += 1;

        let outcome = produce(context).and_then(|value| {
            validators.check(&value)?;
            Ok(value)
        });

        match outcome {
            Ok(value) => {
                log::debug!("accepted input on attempt {}", attempt);
                return Ok(value);
            }
            Err(err) if err.is_retryable() => {
                log::debug!("rejected input on attempt {}: {}", attempt, err);
                context.warning(&err.to_string())?;
            }
            Err(err) => {
                log::error!("giving up on input after {} attempts: {}", attempt, err);
                return Err(err.into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::domain::{errors::ValidationError, validators::numeric};

    #[derive(Default)]
    struct Recorder {
        inputs: VecDeque<Result<i64, InputError>>,
        warnings: Vec<String>,
    }

    impl Recorder {
        fn with_inputs(inputs: Vec<Result<i64, InputError>>) -> Self {
            Recorder {
                inputs: inputs.into(),
                ..Recorder::default()
            }
        }

        fn next(&mut self) -> Result<i64, InputError> {
            self.inputs.pop_front().unwrap_or(Err(InputError::EndOfInput))
        }
    }

    impl Feedback for Recorder {
        fn warning(&mut self, message: &str) -> Result<(), Errors> {
            self.warnings.push(message.into());
            Ok(())
        }
    }

    #[test]
    fn first_valid_value_is_returned_without_warnings() -> anyhow::Result<()> {
        let mut recorder = Recorder::with_inputs(vec![Ok(4)]);

        let value = get_value_or_repeat(&mut recorder, Recorder::next, &Validators::new())?;

        assert_eq!(value, 4);
        assert!(recorder.warnings.is_empty());

        Ok(())
    }

    #[test]
    fn rejected_values_are_warned_and_retried() -> anyhow::Result<()> {
        let mut recorder = Recorder::with_inputs(vec![
            Err(InputError::invalid_value("not a number")),
            Ok(7),
            Err(InputError::InvalidOption),
            Ok(12),
        ]);
        let rules = Validators::new().with(numeric::min(10_i64));

        let value = get_value_or_repeat(&mut recorder, Recorder::next, &rules)?;

        assert_eq!(value, 12);
        assert_eq!(
            recorder.warnings,
            vec![
                "not a number".to_string(),
                "You must enter a number greater than or equal to 10".to_string(),
                "Invalid option".to_string(),
            ]
        );

        Ok(())
    }

    #[test]
    fn validators_run_in_declared_order() {
        let mut recorder = Recorder::with_inputs(vec![Ok(-1)]);
        let rules = Validators::new()
            .with(|_: &i64| -> Result<(), ValidationError> { Err(ValidationError::new("a")) })
            .with(|_: &i64| -> Result<(), ValidationError> { Err(ValidationError::new("b")) });

        let error = get_value_or_repeat(&mut recorder, Recorder::next, &rules).unwrap_err();

        assert!(matches!(error, Errors::EndOfInput));
        assert_eq!(recorder.warnings, vec!["a".to_string()]);
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let mut recorder = Recorder::default();

        let error = get_value_or_repeat(&mut recorder, Recorder::next, &Validators::new())
            .unwrap_err();

        assert!(matches!(error, Errors::EndOfInput));
        assert!(recorder.warnings.is_empty());
    }
}
