use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// Every field, in render order.
    pub const ALL: [FieldName; 3] = [Self::Email, Self::Password, Self::ConfirmPassword];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn is_secret(self) -> bool {
        !matches!(self, Self::Email)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
    pub valid: bool,
    pub touched: bool,
    #[serde(default)]
    pub locked: bool,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The error to render: only surfaced once the field has been touched.
    pub fn visible_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|_| self.touched)
    }

    /// Whether validation has run at least once since the last reset.
    pub fn is_evaluated(&self) -> bool {
        self.valid || self.error.is_some()
    }

    pub(crate) fn apply_outcome(&mut self, outcome: ValidationOutcome) {
        self.valid = outcome.valid;
        self.error = outcome.error;
    }
}

/// Result of evaluating a single field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub error: Option<String>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }
}

impl From<Result<(), String>> for ValidationOutcome {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(message) => Self::invalid(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldName, FieldState, ValidationOutcome};

    #[test]
    fn parses_wire_names() {
        assert_eq!("email".parse::<FieldName>().ok(), Some(FieldName::Email));
        assert_eq!(
            "confirmPassword".parse::<FieldName>().ok(),
            Some(FieldName::ConfirmPassword)
        );
        assert!("username".parse::<FieldName>().is_err());
    }

    #[test]
    fn serde_name_matches_display() {
        for name in FieldName::ALL {
            let json = serde_json::to_string(&name).expect("serialize");
            assert_eq!(json, format!("\"{name}\""));
        }
    }

    #[test]
    fn error_hidden_until_touched() {
        let mut field = FieldState::new();
        field.apply_outcome(ValidationOutcome::invalid("bad"));
        assert_eq!(field.visible_error(), None);

        field.touched = true;
        assert_eq!(field.visible_error(), Some("bad"));
    }

    #[test]
    fn fresh_field_is_not_evaluated() {
        let mut field = FieldState::new();
        assert!(!field.is_evaluated());

        field.apply_outcome(ValidationOutcome::valid());
        assert!(field.is_evaluated());
    }
}
