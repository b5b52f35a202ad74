pub mod config;
pub mod core;
pub mod error;
pub mod replay;

pub use config::{FormConfig, LockPolicy, Messages};
pub use crate::core::{
    Effect, FieldName, FieldState, FieldValidationStore, FieldView, FormEvent, FormState,
    InputKind, Reducer, RuleSet, SubmitPayload, SubmitResult, TransitionPolicy,
    ValidationOutcome, validate,
};
pub use error::{FormError, Result};
