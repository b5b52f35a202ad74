use crate::config::{DEFAULT_EMAIL_PATTERN, FormConfig};
use crate::core::field::{FieldName, ValidationOutcome};
use crate::core::form_state::FormState;
use crate::core::validators::{self, ValidationContext, Validator};
use crate::error::Result;
use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DEFAULT_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_EMAIL_PATTERN).expect("default email pattern compiles"));

static DEFAULT_RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::stock);

/// Evaluate `field`'s stock rule against `value`. `state` supplies the
/// other fields' current values for cross-field rules.
pub fn validate(field: FieldName, value: &str, state: &FormState) -> ValidationOutcome {
    DEFAULT_RULES.validate(field, value, state)
}

#[derive(Default)]
struct FieldRules {
    validators: Vec<Validator>,
    depends_on: Vec<FieldName>,
}

/// Validators per field plus the edges between fields whose rules read
/// each other's values.
#[derive(Default)]
pub struct RuleSet {
    rules: IndexMap<FieldName, FieldRules>,
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, rules) in &self.rules {
            map.entry(
                name,
                &format_args!(
                    "{} validator(s), depends on {:?}",
                    rules.validators.len(),
                    rules.depends_on
                ),
            );
        }
        map.finish()
    }
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credential rules with the default configuration.
    pub fn stock() -> Self {
        Self::with_email_regex(&FormConfig::default(), DEFAULT_EMAIL.clone())
    }

    /// The credential form: email pattern, password length, confirmation
    /// equal to password.
    pub fn credentials(config: &FormConfig) -> Result<Self> {
        config.validate()?;
        let email = config.email_regex()?;
        Ok(Self::with_email_regex(config, email))
    }

    fn with_email_regex(config: &FormConfig, email: Regex) -> Self {
        let messages = &config.messages;
        Self::new()
            .rule(
                FieldName::Email,
                validators::pattern(email, messages.email.clone()),
            )
            .rule(
                FieldName::Password,
                validators::min_length(config.password_min_length, messages.password.clone()),
            )
            .rule(
                FieldName::ConfirmPassword,
                validators::matches_field(FieldName::Password, messages.confirm_password.clone()),
            )
            .depends_on(FieldName::ConfirmPassword, FieldName::Password)
    }

    pub fn rule(mut self, field: FieldName, validator: Validator) -> Self {
        self.rules.entry(field).or_default().validators.push(validator);
        self
    }

    /// Record that `field`'s rules read `dependency`'s value.
    pub fn depends_on(mut self, field: FieldName, dependency: FieldName) -> Self {
        let deps = &mut self.rules.entry(field).or_default().depends_on;
        if !deps.contains(&dependency) {
            deps.push(dependency);
        }
        self
    }

    /// A field without rules always validates.
    pub fn validate(&self, field: FieldName, value: &str, state: &FormState) -> ValidationOutcome {
        let Some(rules) = self.rules.get(&field) else {
            return ValidationOutcome::valid();
        };
        let ctx = ValidationContext::new(state);
        validators::run_validators(&rules.validators, value, &ctx).into()
    }

    /// Fields that must be re-checked when `field`'s value changes.
    pub fn dependents_of(&self, field: FieldName) -> Vec<FieldName> {
        self.rules
            .iter()
            .filter(|(_, rules)| rules.depends_on.contains(&field))
            .map(|(name, _)| *name)
            .collect()
    }
}
