use crate::config::{FormConfig, LockPolicy};
use crate::core::effect::Effect;
use crate::core::event::FormEvent;
use crate::core::field::FieldName;
use crate::core::form_state::FormState;
use crate::core::rules::RuleSet;
use crate::core::submit::{SubmitPayload, SubmitResult};

/// Behaviour switches for transitions, taken from [`FormConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionPolicy {
    pub lock_policy: LockPolicy,
    pub revalidate_on_blur: bool,
    pub revalidate_dependents: bool,
    pub submit_blocked: String,
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        Self::from(&FormConfig::default())
    }
}

impl From<&FormConfig> for TransitionPolicy {
    fn from(config: &FormConfig) -> Self {
        Self {
            lock_policy: config.lock_policy,
            revalidate_on_blur: config.revalidate_on_blur,
            revalidate_dependents: config.revalidate_dependents,
            submit_blocked: config.messages.submit_blocked.clone(),
        }
    }
}

/// Pure transitions over a whole [`FormState`]: the old state goes in,
/// the complete new state comes out.
pub struct Reducer;

impl Reducer {
    pub fn reduce(
        state: FormState,
        event: FormEvent,
        rules: &RuleSet,
        policy: &TransitionPolicy,
    ) -> (FormState, Vec<Effect>) {
        let mut effects = Vec::new();
        let state = match event {
            FormEvent::Change { field, value } => {
                Self::change(state, field, value, rules, policy, &mut effects)
            }
            FormEvent::Blur { field } => Self::blur(state, field, rules, policy, &mut effects),
            FormEvent::Submit => match submit(&state, policy) {
                SubmitResult::Success(payload) => {
                    effects.push(Effect::Submitted(payload));
                    Self::reset(&mut effects)
                }
                SubmitResult::Blocked { message } => {
                    effects.push(Effect::SubmitBlocked { message });
                    state
                }
            },
            FormEvent::Reset => Self::reset(&mut effects),
            FormEvent::Lock { field, locked } => {
                Self::set_locked(state, field, locked, &mut effects)
            }
        };
        (state, effects)
    }

    fn change(
        mut state: FormState,
        field: FieldName,
        value: String,
        rules: &RuleSet,
        policy: &TransitionPolicy,
        effects: &mut Vec<Effect>,
    ) -> FormState {
        if state.field(field).locked {
            tracing::debug!(field = %field, "change ignored, field is locked");
            effects.push(Effect::ChangeRejected { field });
            return state;
        }

        state.field_mut(field).value = value;
        Self::revalidate(&mut state, field, rules, policy, effects);

        if policy.revalidate_dependents {
            Self::revalidate_dependents(&mut state, field, rules, policy, effects);
        }
        state
    }

    fn blur(
        mut state: FormState,
        field: FieldName,
        rules: &RuleSet,
        policy: &TransitionPolicy,
        effects: &mut Vec<Effect>,
    ) -> FormState {
        let entry = state.field_mut(field);
        if !entry.touched {
            entry.touched = true;
            effects.push(Effect::Touched { field });
        }

        if policy.revalidate_on_blur {
            Self::revalidate(&mut state, field, rules, policy, effects);
        }
        state
    }

    fn reset(effects: &mut Vec<Effect>) -> FormState {
        effects.push(Effect::Reset);
        FormState::new()
    }

    fn set_locked(
        mut state: FormState,
        field: FieldName,
        locked: bool,
        effects: &mut Vec<Effect>,
    ) -> FormState {
        let entry = state.field_mut(field);
        if entry.locked != locked {
            entry.locked = locked;
            effects.push(Effect::LockChanged { field, locked });
        }
        state
    }

    /// Re-check every field that transitively reads `changed`, skipping
    /// fields that were never evaluated so untouched blanks stay blank.
    fn revalidate_dependents(
        state: &mut FormState,
        changed: FieldName,
        rules: &RuleSet,
        policy: &TransitionPolicy,
        effects: &mut Vec<Effect>,
    ) {
        let mut visited = vec![changed];
        let mut pending = rules.dependents_of(changed);

        while let Some(dependent) = pending.pop() {
            if visited.contains(&dependent) {
                continue;
            }
            visited.push(dependent);

            if !state.field(dependent).is_evaluated() {
                continue;
            }
            Self::revalidate(state, dependent, rules, policy, effects);
            pending.extend(rules.dependents_of(dependent));
        }
    }

    fn revalidate(
        state: &mut FormState,
        field: FieldName,
        rules: &RuleSet,
        policy: &TransitionPolicy,
        effects: &mut Vec<Effect>,
    ) {
        let outcome = rules.validate(field, state.value(field), state);
        let valid = outcome.valid;
        tracing::debug!(field = %field, valid, "validated");

        let entry = state.field_mut(field);
        entry.apply_outcome(outcome);
        effects.push(Effect::Validated { field, valid });

        if policy.lock_policy == LockPolicy::WhenValid && entry.locked != valid {
            entry.locked = valid;
            effects.push(Effect::LockChanged {
                field,
                locked: valid,
            });
        }
    }
}

/// Gate and collect a submission. Never resets: on success the caller
/// replaces the state with [`FormState::new`].
pub fn submit(state: &FormState, policy: &TransitionPolicy) -> SubmitResult {
    if !state.can_submit() {
        let invalid: Vec<&str> = state
            .iter()
            .filter(|(_, field)| !field.valid)
            .map(|(name, _)| name.as_str())
            .collect();
        tracing::warn!(?invalid, "{}", policy.submit_blocked);
        return SubmitResult::Blocked {
            message: policy.submit_blocked.clone(),
        };
    }

    let payload = SubmitPayload::from_state(state);
    payload.log();
    SubmitResult::Success(payload)
}
