//! Route guard decisions driven by the auth context.
//!
//! DESIGN
//! ======
//! `decide` maps one auth snapshot to a decision. `RouteGuard` wraps it with
//! the memory needed to navigate exactly once per transition into a denied
//! state: repeated emissions of the same denial do not navigate again, and a
//! guard that never leaves `loading` never navigates at all.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::{AuthState, AuthStatus};

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where signed-in users without the admin role are sent.
pub const HOME_PATH: &str = "/";

/// What a guarded route demands of the current user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    SignedIn,
    Admin,
}

/// Outcome for a single auth snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Auth still loading: show a placeholder, take no action.
    Wait,
    /// Render the protected content.
    Allow,
    /// Render nothing and navigate away.
    Deny { redirect_to: &'static str },
}

/// What the guard renders for a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    Placeholder,
    Content,
    Nothing,
}

impl Decision {
    #[must_use]
    pub fn view(self) -> GuardView {
        match self {
            Self::Wait => GuardView::Placeholder,
            Self::Allow => GuardView::Content,
            Self::Deny { .. } => GuardView::Nothing,
        }
    }
}

#[must_use]
pub fn decide(requirement: Requirement, state: &AuthState) -> Decision {
    match state.status() {
        AuthStatus::Loading => Decision::Wait,
        AuthStatus::Unauthenticated => Decision::Deny { redirect_to: LOGIN_PATH },
        AuthStatus::Authenticated => match requirement {
            Requirement::SignedIn => Decision::Allow,
            Requirement::Admin if state.is_admin() => Decision::Allow,
            Requirement::Admin => Decision::Deny { redirect_to: HOME_PATH },
        },
    }
}

/// Result of feeding one auth emission to a [`RouteGuard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardStep {
    pub decision: Decision,
    /// Navigation to issue now, if any.
    pub navigate_to: Option<&'static str>,
}

/// Stateful guard that re-evaluates on every auth emission.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    requirement: Requirement,
    last: Option<Decision>,
}

impl RouteGuard {
    #[must_use]
    pub fn new(requirement: Requirement) -> Self {
        Self { requirement, last: None }
    }

    /// Evaluate a new auth snapshot.
    pub fn observe(&mut self, state: &AuthState) -> GuardStep {
        let decision = decide(self.requirement, state);
        let navigate_to = match decision {
            Decision::Deny { redirect_to } if self.last != Some(decision) => Some(redirect_to),
            _ => None,
        };
        self.last = Some(decision);
        GuardStep { decision, navigate_to }
    }
}
