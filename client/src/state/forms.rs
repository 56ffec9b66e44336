//! Modal form lifecycles for login and pickup scheduling.
//!
//! DESIGN
//! ======
//! Each modal holds a form value, its current error map, and a small phase
//! enum. The component owns one of these in a signal; all transitions go
//! through the methods below so the timer-driven pickup confirmation can be
//! tested without a browser.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::util::mount_guard::MountGuard;
use crate::util::validation::{
    FIELD_DATE, FIELD_EMAIL, FIELD_ITEMS, FIELD_LOCATION, FIELD_PASSWORD, FIELD_TIME, FieldErrors, LoginForm,
    PickupForm,
};

/// Delay between a successful pickup submit and the modal auto-closing.
pub const PICKUP_CONFIRMATION_DELAY_MS: u32 = 2000;

/// Selectable pickup windows as `(value, label)`.
pub const TIME_SLOTS: &[(&str, &str)] = &[
    ("9-11", "9:00 AM - 11:00 AM"),
    ("11-1", "11:00 AM - 1:00 PM"),
    ("2-4", "2:00 PM - 4:00 PM"),
    ("4-6", "4:00 PM - 6:00 PM"),
];

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::SignUp => "Create Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Login to your ECONNECTO account",
            Self::SignUp => "Join ECONNECTO and start recycling",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::SignUp => "Create Account",
        }
    }

    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::Login => ("Don't have an account?", "Sign Up"),
            Self::SignUp => ("Already have an account?", "Login"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub form: LoginForm,
    pub errors: FieldErrors,
    pub mode: AuthMode,
    pub show_password: bool,
}

impl LoginFormState {
    pub fn set_email(&mut self, value: String) {
        self.form.email = value;
        self.errors.clear(FIELD_EMAIL);
    }

    pub fn set_password(&mut self, value: String) {
        self.form.password = value;
        self.errors.clear(FIELD_PASSWORD);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Flip Login/Sign-Up. Errors from the other mode are discarded.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        };
        self.errors = FieldErrors::new();
    }

    /// Validate; on success clear the fields and return `true`.
    pub fn submit(&mut self) -> bool {
        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return false;
        }
        self.form = LoginForm::default();
        true
    }

    /// Discard input and errors when the modal closes.
    pub fn reset(&mut self) {
        self.form = LoginForm::default();
        self.errors = FieldErrors::new();
    }
}

// =============================================================================
// PICKUP
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Confirmation panel is showing; the close timer is pending.
    Submitted,
}

/// Which pickup field an input event targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupField {
    Date,
    TimeSlot,
    Location,
    Items,
    Notes,
}

impl PickupField {
    fn error_key(self) -> Option<&'static str> {
        match self {
            Self::Date => Some(FIELD_DATE),
            Self::TimeSlot => Some(FIELD_TIME),
            Self::Location => Some(FIELD_LOCATION),
            Self::Items => Some(FIELD_ITEMS),
            Self::Notes => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickupFormState {
    pub form: PickupForm,
    pub errors: FieldErrors,
    pub phase: FormPhase,
}

impl PickupFormState {
    pub fn set(&mut self, field: PickupField, value: String) {
        let slot = match field {
            PickupField::Date => &mut self.form.date,
            PickupField::TimeSlot => &mut self.form.time_slot,
            PickupField::Location => &mut self.form.location,
            PickupField::Items => &mut self.form.items,
            PickupField::Notes => &mut self.form.notes,
        };
        *slot = value;
        if let Some(key) = field.error_key() {
            self.errors.clear(key);
        }
    }

    /// Validate; on success enter `Submitted` and return `true`.
    ///
    /// A second submit while already `Submitted` is ignored.
    pub fn submit(&mut self) -> bool {
        if self.phase == FormPhase::Submitted {
            return false;
        }
        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return false;
        }
        self.phase = FormPhase::Submitted;
        true
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Confirmation delay elapsed: clear every field and return to editing.
    pub fn complete(&mut self) {
        self.reset();
    }

    /// The confirmation delay fired. Completes the form and returns `true`
    /// (the caller should close the modal) only if the modal is still
    /// mounted and waiting; otherwise nothing changes.
    pub fn confirmation_elapsed(&mut self, guard: &MountGuard) -> bool {
        if !guard.is_mounted() || !self.is_submitted() {
            return false;
        }
        self.complete();
        true
    }

    /// Discard input, errors, and any pending confirmation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
