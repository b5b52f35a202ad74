use crate::core::field::FieldName;
use crate::core::submit::SubmitPayload;
use serde::{Deserialize, Serialize};

/// Observable consequences of a transition, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "camelCase")]
pub enum Effect {
    Validated { field: FieldName, valid: bool },
    ChangeRejected { field: FieldName },
    Touched { field: FieldName },
    LockChanged { field: FieldName, locked: bool },
    Submitted(SubmitPayload),
    SubmitBlocked { message: String },
    Reset,
}
