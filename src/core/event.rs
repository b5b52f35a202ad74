use crate::core::field::FieldName;
use serde::{Deserialize, Serialize};

/// Host notifications, one per call into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormEvent {
    Change { field: FieldName, value: String },
    Blur { field: FieldName },
    Submit,
    Reset,
    Lock { field: FieldName, locked: bool },
}

impl FormEvent {
    pub fn change(field: FieldName, value: impl Into<String>) -> Self {
        Self::Change {
            field,
            value: value.into(),
        }
    }

    pub fn blur(field: FieldName) -> Self {
        Self::Blur { field }
    }
}
