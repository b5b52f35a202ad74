use credform::{
    FieldName, FieldState, FieldValidationStore, FormConfig, FormState, SubmitResult, validate,
};
use proptest::prelude::*;

fn field_name() -> impl Strategy<Value = FieldName> {
    prop::sample::select(FieldName::ALL.to_vec())
}

fn fill_valid(store: &mut FieldValidationStore) {
    store.on_field_change(FieldName::Email, "a@b.co");
    store.on_field_change(FieldName::Password, "abcdef");
    store.on_field_change(FieldName::ConfirmPassword, "abcdef");
}

#[test]
fn email_scenario() {
    let mut store = FieldValidationStore::new();
    let email = &store.on_field_change(FieldName::Email, "bad").email;
    assert!(!email.valid);
    assert_eq!(email.error.as_deref(), Some("Введите корректный email"));

    let email = &store.on_field_change(FieldName::Email, "a@b.co").email;
    assert!(email.valid);
    assert_eq!(email.error, None);
}

#[test]
fn password_scenario() {
    let mut store = FieldValidationStore::new();
    assert!(!store.on_field_change(FieldName::Password, "12345").password.valid);
    assert!(store.on_field_change(FieldName::Password, "123456").password.valid);
}

#[test]
fn confirmation_scenario() {
    let mut store = FieldValidationStore::new();
    store.on_field_change(FieldName::Password, "abcdef");
    assert!(store.on_field_change(FieldName::ConfirmPassword, "abcdef").confirm_password.valid);

    let confirm = &store.on_field_change(FieldName::ConfirmPassword, "abcdeg").confirm_password;
    assert!(!confirm.valid);
    assert_eq!(confirm.error.as_deref(), Some("Пароли не совпадают"));
}

#[test]
fn submit_then_reset_scenario() {
    let mut store = FieldValidationStore::new();
    fill_valid(&mut store);
    store.on_field_blur(FieldName::Email);
    assert!(store.can_submit());

    let SubmitResult::Success(payload) = store.submit() else {
        panic!("expected success");
    };
    assert_eq!(payload.email, "a@b.co");
    assert_eq!(payload.password, "abcdef");
    assert_eq!(payload.confirm_password, "abcdef");

    let state = store.reset();
    for (_, field) in state.iter() {
        assert_eq!(field, &FieldState::new());
    }
}

#[test]
fn form_is_reusable_after_submit() {
    let mut store = FieldValidationStore::new();
    fill_valid(&mut store);
    assert!(store.submit().is_success());

    fill_valid(&mut store);
    assert!(store.submit().is_success());
}

#[test]
fn legacy_config_leaves_confirmation_stale() {
    let config = FormConfig {
        revalidate_dependents: false,
        ..FormConfig::default()
    };
    let mut store = FieldValidationStore::from_config(&config).expect("store");
    fill_valid(&mut store);
    store.on_field_change(FieldName::Password, "changed!");
    assert!(store.state().confirm_password.valid);

    store.on_field_blur(FieldName::ConfirmPassword);
    assert!(!store.state().confirm_password.valid);
}

proptest! {
    #[test]
    fn change_is_never_stale(
        steps in prop::collection::vec((field_name(), ".{0,12}"), 1..16),
    ) {
        let mut store = FieldValidationStore::new();
        for (field, value) in steps {
            let state = store.on_field_change(field, value.clone()).clone();
            let mut expected_ctx = state.clone();
            expected_ctx.field_mut(field).value = value.clone();
            let expected = validate(field, &value, &expected_ctx);
            prop_assert_eq!(state.field(field).valid, expected.valid);
            prop_assert_eq!(&state.field(field).error, &expected.error);
            prop_assert_eq!(state.field(field).error.is_some(), !state.field(field).valid);
        }
    }

    #[test]
    fn blur_leaves_other_fields_alone(
        steps in prop::collection::vec((field_name(), "[a-z@.]{0,8}"), 0..8),
        blurred in field_name(),
    ) {
        let mut store = FieldValidationStore::new();
        for (field, value) in steps {
            store.on_field_change(field, value);
        }
        let before = store.state().clone();
        let after = store.on_field_blur(blurred).clone();

        prop_assert!(after.field(blurred).touched);
        prop_assert_eq!(&after.field(blurred).value, &before.field(blurred).value);
        for name in FieldName::ALL.into_iter().filter(|name| *name != blurred) {
            prop_assert_eq!(after.field(name), before.field(name));
        }
    }

    #[test]
    fn blocked_submit_is_a_no_op(
        steps in prop::collection::vec((field_name(), "[a-z@.]{0,8}"), 0..8),
    ) {
        let mut store = FieldValidationStore::new();
        for (field, value) in steps {
            store.on_field_change(field, value);
        }
        let before: FormState = store.state().clone();
        let can_submit = store.can_submit();
        let result = store.submit();

        prop_assert_eq!(result.is_success(), can_submit);
        if !can_submit {
            prop_assert_eq!(store.state(), &before);
        } else {
            prop_assert!(store.state().is_initial());
        }
    }
}
