use crate::config::FormConfig;
use crate::core::effect::Effect;
use crate::core::event::FormEvent;
use crate::core::field::{FieldName, ValidationOutcome};
use crate::core::form_state::FormState;
use crate::core::reducer::{self, Reducer, TransitionPolicy};
use crate::core::rules::RuleSet;
use crate::core::submit::SubmitResult;
use crate::error::Result;

/// Single owner of one form's state. Every method applies one whole
/// transition before returning.
#[derive(Debug)]
pub struct FieldValidationStore {
    state: FormState,
    rules: RuleSet,
    policy: TransitionPolicy,
}

impl Default for FieldValidationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidationStore {
    pub fn new() -> Self {
        Self::with_rules(RuleSet::stock(), TransitionPolicy::default())
    }

    pub fn from_config(config: &FormConfig) -> Result<Self> {
        let rules = RuleSet::credentials(config)?;
        Ok(Self::with_rules(rules, TransitionPolicy::from(config)))
    }

    pub fn with_rules(rules: RuleSet, policy: TransitionPolicy) -> Self {
        Self {
            state: FormState::new(),
            rules,
            policy,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn policy(&self) -> &TransitionPolicy {
        &self.policy
    }

    pub fn on_field_change(&mut self, field: FieldName, value: impl Into<String>) -> &FormState {
        self.dispatch(FormEvent::change(field, value));
        &self.state
    }

    pub fn on_field_blur(&mut self, field: FieldName) -> &FormState {
        self.dispatch(FormEvent::blur(field));
        &self.state
    }

    pub fn set_locked(&mut self, field: FieldName, locked: bool) -> &FormState {
        self.dispatch(FormEvent::Lock { field, locked });
        &self.state
    }

    /// Evaluate `field`'s rule against `value` without changing anything.
    pub fn validate(&self, field: FieldName, value: &str) -> ValidationOutcome {
        self.rules.validate(field, value, &self.state)
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Submit the form; a successful submission resets it.
    pub fn submit(&mut self) -> SubmitResult {
        let result = reducer::submit(&self.state, &self.policy);
        if result.is_success() {
            self.reset();
        }
        result
    }

    pub fn reset(&mut self) -> &FormState {
        self.dispatch(FormEvent::Reset);
        &self.state
    }

    pub fn dispatch(&mut self, event: FormEvent) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = Reducer::reduce(state, event, &self.rules, &self.policy);
        self.state = state;
        effects
    }
}
