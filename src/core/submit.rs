use crate::core::field::FieldName;
use crate::core::form_state::FormState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The collected values of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SubmitPayload {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            email: state.email.value.clone(),
            password: state.password.value.clone(),
            confirm_password: state.confirm_password.value.clone(),
        }
    }

    pub fn value(&self, name: FieldName) -> &str {
        match name {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn to_map(&self) -> IndexMap<FieldName, String> {
        FieldName::ALL
            .into_iter()
            .map(|name| (name, self.value(name).to_string()))
            .collect()
    }

    /// Emit the submission the way the form reports it. Secret fields are
    /// masked.
    pub fn log(&self) {
        for (name, value) in self.to_map() {
            let shown = if name.is_secret() {
                "*".repeat(value.chars().count())
            } else {
                value
            };
            tracing::info!(field = %name, value = %shown, "submitted");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmitResult {
    /// At least one field is invalid. The form stays editable.
    Blocked { message: String },
    Success(SubmitPayload),
}

impl SubmitResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn payload(&self) -> Option<&SubmitPayload> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Blocked { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SubmitPayload, SubmitResult};
    use crate::core::field::FieldName;
    use crate::core::form_state::FormState;

    #[test]
    fn payload_keeps_field_order() {
        let mut state = FormState::new();
        state.email.value = "a@b.co".to_string();
        state.password.value = "abcdef".to_string();
        state.confirm_password.value = "abcdef".to_string();

        let payload = SubmitPayload::from_state(&state);
        let keys: Vec<FieldName> = payload.to_map().keys().copied().collect();
        assert_eq!(keys, FieldName::ALL.to_vec());
        assert_eq!(payload.value(FieldName::Email), "a@b.co");
    }

    #[test]
    fn result_serializes_with_status_tag() {
        let blocked = SubmitResult::Blocked {
            message: "no".to_string(),
        };
        let json = serde_json::to_value(&blocked).expect("serialize");
        assert_eq!(json["status"], "blocked");
        assert!(blocked.payload().is_none());
        assert!(!blocked.is_success());
    }
}
