//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the application root as `RwSignal<AuthState>`. Route
//! guards and user-aware components subscribe to it; the browser populates it
//! from `/api/auth/me` after hydration.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use models::SessionUser;

/// Three-way view of the auth context consumed by route guards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// The identity lookup has not resolved yet.
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts in `loading` until the first identity lookup resolves.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        if self.loading {
            AuthStatus::Loading
        } else if self.user.is_some() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    /// Record a resolved identity lookup (`None` when signed out).
    pub fn resolve(&mut self, user: Option<SessionUser>) {
        self.user = user;
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.resolve(None);
    }
}
