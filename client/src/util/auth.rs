//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies identical redirect behavior, and the auth
//! context is populated the same way on every page load.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::guard::{Requirement, RouteGuard};
use crate::state::auth::AuthState;

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Navigate away whenever the guard denies access.
///
/// The effect re-runs on every auth change and feeds each snapshot to
/// [`redirect_driver`]. Effects do not run during SSR, so the server never
/// redirects.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, requirement: Requirement, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut drive = redirect_driver(requirement, navigate);
    Effect::new(move || auth.with(|state| drive(state)));
}

/// Per-emission redirect logic: one `navigate` call per transition into a
/// denied state, none while loading or allowed.
pub fn redirect_driver<F>(requirement: Requirement, navigate: F) -> impl FnMut(&AuthState) + 'static
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let mut guard = RouteGuard::new(requirement);
    move |state: &AuthState| {
        if let Some(path) = guard.observe(state).navigate_to {
            navigate(path, NavigateOptions::default());
        }
    }
}

/// End the server session and mark the context signed out.
///
/// Guarded pages react to the context change and send the visitor to `/login`.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        log::debug!("signed out");
        auth.update(AuthState::sign_out);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}

/// Resolve the current identity once the app is mounted in the browser.
///
/// On the server the context stays in `loading`, so guarded routes render
/// their placeholder until hydration finishes the lookup.
pub fn init_auth(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        log::debug!("auth resolved, signed_in={}", user.is_some());
        auth.update(|state| state.resolve(user));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}
