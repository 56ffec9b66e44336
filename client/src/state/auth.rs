//! Session-only sign-in flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no credential check anywhere: a login form that passes field
//! validation flips the flag. The flag lives for the page session only.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
}

impl AuthState {
    /// Mark the session signed in and dismiss the login modal.
    pub fn login_succeeded(&mut self, ui: &mut UiState) {
        self.authenticated = true;
        ui.close_login();
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    /// Single-letter avatar shown in the navigation bar.
    pub fn avatar_initial(self) -> Option<&'static str> {
        self.authenticated.then_some("U")
    }
}
