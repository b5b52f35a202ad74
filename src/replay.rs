//! Drive a store from a recorded list of host events.

use crate::config;
use crate::core::effect::Effect;
use crate::core::event::FormEvent;
use crate::core::form_state::FormState;
use crate::core::store::FieldValidationStore;
use crate::error::{FormError, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub effects: Vec<Effect>,
    pub state: FormState,
    pub can_submit: bool,
}

pub fn load_events(path: &Path) -> Result<Vec<FormEvent>> {
    let raw = fs::read_to_string(path).map_err(|source| FormError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let events: Vec<FormEvent> = if config::is_json(path) {
        serde_json::from_str(&raw).map_err(|source| FormError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        serde_yaml::from_str(&raw).map_err(|source| FormError::Yaml {
            path: path.to_path_buf(),
            source,
        })?
    };

    tracing::debug!(count = events.len(), path = %path.display(), "loaded events");
    Ok(events)
}

pub fn replay(
    store: &mut FieldValidationStore,
    events: impl IntoIterator<Item = FormEvent>,
) -> ReplayReport {
    let mut effects = Vec::new();
    for event in events {
        effects.extend(store.dispatch(event));
    }
    ReplayReport {
        effects,
        state: store.state().clone(),
        can_submit: store.can_submit(),
    }
}
