pub mod effect;
pub mod event;
pub mod field;
pub mod form_state;
pub mod reducer;
pub mod rules;
pub mod store;
pub mod submit;
pub mod validators;

pub use effect::Effect;
pub use event::FormEvent;
pub use field::{FieldName, FieldState, ValidationOutcome};
pub use form_state::{FieldView, FormState, InputKind};
pub use reducer::{Reducer, TransitionPolicy};
pub use rules::{RuleSet, validate};
pub use store::FieldValidationStore;
pub use submit::{SubmitPayload, SubmitResult};
