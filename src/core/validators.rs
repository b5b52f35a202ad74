use crate::core::field::FieldName;
use crate::core::form_state::FormState;
use regex::Regex;

pub type ValidationError = String;
pub type Validator =
    Box<dyn Fn(&str, &ValidationContext<'_>) -> Result<(), ValidationError> + Send + Sync>;

/// Live view of the form handed to every validator, so cross-field rules
/// read the values as they are at validation time.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    state: &'a FormState,
}

impl<'a> ValidationContext<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    pub fn value(&self, name: FieldName) -> &'a str {
        self.state.value(name)
    }

    pub fn state(&self) -> &'a FormState {
        self.state
    }
}

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(
    validators: &[Validator],
    value: &str,
    ctx: &ValidationContext<'_>,
) -> Result<(), ValidationError> {
    for validator in validators {
        validator(value, ctx)?;
    }
    Ok(())
}

pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str, _: &ValidationContext<'_>| {
        if value.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min_len: usize, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str, _: &ValidationContext<'_>| {
        if value.chars().count() < min_len {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn pattern(re: Regex, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str, _: &ValidationContext<'_>| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

/// Value must equal the current value of `other`.
pub fn matches_field(other: FieldName, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str, ctx: &ValidationContext<'_>| {
        if value == ctx.value(other) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

pub fn custom<F>(f: F, message: impl Into<String>) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let msg = message.into();
    Box::new(move |value: &str, _: &ValidationContext<'_>| {
        if f(value) { Ok(()) } else { Err(msg.clone()) }
    })
}
