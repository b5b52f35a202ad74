use crate::core::field::{FieldName, FieldState};
use serde::{Deserialize, Serialize};

/// Canonical form state: one [`FieldState`] per field, always all three.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub email: FieldState,
    pub password: FieldState,
    pub confirm_password: FieldState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, name: FieldName) -> &FieldState {
        match name {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FieldState {
        match name {
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        }
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.field(name).value.as_str()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldState)> {
        FieldName::ALL.into_iter().map(move |name| (name, self.field(name)))
    }

    /// Submission is enabled only while every field is valid.
    pub fn can_submit(&self) -> bool {
        self.iter().all(|(_, field)| field.valid)
    }

    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }

    pub fn views(&self) -> Vec<FieldView<'_>> {
        self.iter().map(|(name, field)| FieldView::new(name, field)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Email,
    Password,
}

/// What the presentation layer needs to draw one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub name: FieldName,
    pub kind: InputKind,
    pub placeholder: &'static str,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub highlight_invalid: bool,
    pub disabled: bool,
}

impl<'a> FieldView<'a> {
    pub fn new(name: FieldName, field: &'a FieldState) -> Self {
        let error = field.visible_error();
        Self {
            name,
            kind: match name {
                FieldName::Email => InputKind::Email,
                FieldName::Password | FieldName::ConfirmPassword => InputKind::Password,
            },
            placeholder: match name {
                FieldName::Email => "Email",
                FieldName::Password => "Password",
                FieldName::ConfirmPassword => "Confirm Password",
            },
            value: field.value.as_str(),
            error,
            highlight_invalid: error.is_some(),
            disabled: field.locked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormState, InputKind};
    use crate::core::field::FieldName;

    #[test]
    fn initial_state_is_blank_and_blocked() {
        let state = FormState::new();
        assert!(state.is_initial());
        assert!(!state.can_submit());
        for (_, field) in state.iter() {
            assert_eq!(field.value, "");
            assert_eq!(field.error, None);
            assert!(!field.valid);
            assert!(!field.touched);
        }
    }

    #[test]
    fn can_submit_needs_every_field() {
        let mut state = FormState::new();
        state.email.valid = true;
        state.password.valid = true;
        assert!(!state.can_submit());

        state.confirm_password.valid = true;
        assert!(state.can_submit());
    }

    #[test]
    fn serializes_with_wire_keys() {
        let json = serde_json::to_value(FormState::new()).expect("serialize");
        let keys: Vec<&str> = json
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert!(keys.contains(&"confirmPassword"));
        assert_eq!(json["email"]["error"], serde_json::Value::Null);
    }

    #[test]
    fn views_follow_render_rules() {
        let mut state = FormState::new();
        state.confirm_password.error = Some("Пароли не совпадают".to_string());
        {
            let views = state.views();
            let confirm = &views[2];
            assert_eq!(confirm.name, FieldName::ConfirmPassword);
            assert_eq!(confirm.kind, InputKind::Password);
            assert_eq!(confirm.placeholder, "Confirm Password");
            assert_eq!(confirm.error, None);
            assert!(!confirm.highlight_invalid);
        }

        state.confirm_password.touched = true;
        let views = state.views();
        assert_eq!(views[2].error, Some("Пароли не совпадают"));
        assert!(views[2].highlight_invalid);
    }
}
