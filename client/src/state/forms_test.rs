use super::*;
use crate::state::ui::UiState;
use crate::util::mount_guard::MountGuard;

// =============================================================
// LoginFormState
// =============================================================

#[test]
fn login_submit_with_empty_fields_fails_and_keeps_errors() {
    let mut state = LoginFormState::default();
    assert!(!state.submit());
    assert!(state.errors.has(FIELD_EMAIL));
    assert!(state.errors.has(FIELD_PASSWORD));
}

#[test]
fn login_submit_success_clears_fields() {
    let mut state = LoginFormState::default();
    state.set_email("me@econnecto.in".to_owned());
    state.set_password("hunter22".to_owned());
    assert!(state.submit());
    assert_eq!(state.form, LoginForm::default());
    assert!(state.errors.is_empty());
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut state = LoginFormState::default();
    state.submit();
    state.set_email("x".to_owned());
    assert!(!state.errors.has(FIELD_EMAIL));
    assert!(state.errors.has(FIELD_PASSWORD));
}

#[test]
fn toggle_mode_flips_and_clears_errors() {
    let mut state = LoginFormState::default();
    state.submit();
    state.toggle_mode();
    assert_eq!(state.mode, AuthMode::SignUp);
    assert!(state.errors.is_empty());
    state.toggle_mode();
    assert_eq!(state.mode, AuthMode::Login);
}

#[test]
fn login_reset_discards_input() {
    let mut state = LoginFormState::default();
    state.set_email("a@b.co".to_owned());
    state.submit();
    state.reset();
    assert_eq!(state.form, LoginForm::default());
    assert!(state.errors.is_empty());
}

#[test]
fn auth_mode_copy() {
    assert_eq!(AuthMode::Login.submit_label(), "Login");
    assert_eq!(AuthMode::SignUp.heading(), "Create Account");
    assert_eq!(AuthMode::Login.switch_prompt().1, "Sign Up");
}

// =============================================================
// PickupFormState
// =============================================================

fn fill(state: &mut PickupFormState) {
    state.set(PickupField::Date, "2024-12-01".to_owned());
    state.set(PickupField::TimeSlot, "9-11".to_owned());
    state.set(PickupField::Location, "Test Address".to_owned());
    state.set(PickupField::Items, "Old Phone".to_owned());
}

#[test]
fn pickup_submit_then_delay_resets_and_closes() {
    let mut ui = UiState::default();
    ui.open_pickup();
    let guard = MountGuard::new();
    let timer_side = guard.clone();
    let mut state = PickupFormState::default();
    fill(&mut state);

    assert!(state.submit());
    assert!(state.errors.is_empty());
    assert!(state.is_submitted());
    assert!(ui.pickup_modal_open);

    // Confirmation delay fires while the modal is still mounted.
    if state.confirmation_elapsed(&timer_side) {
        ui.close_pickup();
    }

    assert!(!ui.pickup_modal_open);
    assert!(state.form.is_blank());
    assert_eq!(state.phase, FormPhase::Editing);
}

#[test]
fn pickup_closed_before_delay_skips_completion_and_close() {
    let mut ui = UiState::default();
    ui.open_pickup();
    let guard = MountGuard::new();
    let timer_side = guard.clone();
    let mut state = PickupFormState::default();
    fill(&mut state);
    assert!(state.submit());

    // User closes early; unmount disarms the guard. A fresh modal opens.
    ui.close_pickup();
    guard.disarm();
    ui.open_pickup();

    // The stale timer wakes up afterwards.
    let closes = state.confirmation_elapsed(&timer_side);

    assert!(!closes);
    assert!(ui.pickup_modal_open);
    assert!(state.is_submitted());
    assert_eq!(state.form.location, "Test Address");
}

#[test]
fn pickup_delay_without_submit_does_nothing() {
    let guard = MountGuard::new();
    let mut state = PickupFormState::default();
    state.set(PickupField::Location, "Draft".to_owned());

    assert!(!state.confirmation_elapsed(&guard));
    assert_eq!(state.form.location, "Draft");
}

#[test]
fn pickup_submit_with_missing_fields_stays_editing() {
    let mut state = PickupFormState::default();
    state.set(PickupField::Notes, "ring the bell".to_owned());
    assert!(!state.submit());
    assert_eq!(state.phase, FormPhase::Editing);
    assert_eq!(state.errors.len(), 4);
    assert_eq!(state.form.notes, "ring the bell");
}

#[test]
fn pickup_edit_clears_that_fields_error() {
    let mut state = PickupFormState::default();
    state.submit();
    state.set(PickupField::Items, "Laptop".to_owned());
    assert!(!state.errors.has(FIELD_ITEMS));
    assert!(state.errors.has(FIELD_DATE));
    state.set(PickupField::Notes, "n".to_owned());
    assert_eq!(state.errors.len(), 3);
}

#[test]
fn pickup_double_submit_is_ignored() {
    let mut state = PickupFormState::default();
    fill(&mut state);
    assert!(state.submit());
    assert!(!state.submit());
    assert!(state.is_submitted());
}

#[test]
fn pickup_reset_cancels_confirmation() {
    let mut state = PickupFormState::default();
    fill(&mut state);
    state.submit();
    state.reset();
    assert_eq!(state, PickupFormState::default());
}

#[test]
fn time_slot_values_are_known() {
    let values = TIME_SLOTS.iter().map(|(v, _)| *v).collect::<Vec<_>>();
    assert_eq!(values, vec!["9-11", "11-1", "2-4", "4-6"]);
}

#[test]
fn confirmation_delay_is_two_seconds() {
    assert_eq!(PICKUP_CONFIRMATION_DELAY_MS, 2000);
}
