//! Form configuration.
//!
//! Every key is optional; an empty document yields the stock credential
//! form. Files ending in `.json` are read as JSON, everything else as YAML.

use crate::error::{FormError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FormConfig {
    pub password_min_length: usize,
    pub email_pattern: String,
    pub messages: Messages,
    pub lock_policy: LockPolicy,
    pub revalidate_on_blur: bool,
    pub revalidate_dependents: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            messages: Messages::default(),
            lock_policy: LockPolicy::default(),
            revalidate_on_blur: true,
            revalidate_dependents: true,
        }
    }
}

impl FormConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| FormError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = if is_json(path) {
            serde_json::from_str(&raw).map_err(|source| FormError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else if raw.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&raw).map_err(|source| FormError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded form config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.password_min_length == 0 {
            return Err(FormError::Config(
                "passwordMinLength must be at least 1".to_string(),
            ));
        }
        self.email_regex().map(|_| ())
    }

    pub fn email_regex(&self) -> Result<Regex> {
        Regex::new(&self.email_pattern).map_err(|source| FormError::Pattern {
            pattern: self.email_pattern.clone(),
            source,
        })
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|err| FormError::Output(err.to_string()))
    }
}

pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// User-facing texts. Defaults are the form's Russian UI strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Messages {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub submit_blocked: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            email: "Введите корректный email".to_string(),
            password: "Пароль должен содержать минимум 6 символов".to_string(),
            confirm_password: "Пароли не совпадают".to_string(),
            submit_blocked: "Форма содержит ошибки. Пожалуйста, исправьте их перед отправкой."
                .to_string(),
        }
    }
}

/// When fields become read-only on their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LockPolicy {
    /// Fields lock only through explicit `set_locked` calls.
    #[default]
    Never,
    /// A field locks while its value is valid.
    WhenValid,
}
