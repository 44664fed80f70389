//! Route wrappers that render their children only for permitted users.
//!
//! SYSTEM CONTEXT
//! ==============
//! UI-only guards: they keep visitors away from screens they cannot use, but
//! every API route still checks the session on its own.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::guard::{GuardView, Requirement, decide};
use crate::state::auth::AuthState;
use crate::util::auth::install_guard_redirect;

/// Render children for signed-in users; send everyone else to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(Requirement::SignedIn, children)
}

/// Render children for administrators only.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(Requirement::Admin, children)
}

fn guarded(requirement: Requirement, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_guard_redirect(auth, requirement, navigate);

    move || match auth.with(|state| decide(requirement, state).view()) {
        GuardView::Placeholder => view! {
            <div class="guard-placeholder" role="status">
                <span class="spinner"></span>
                "Loading..."
            </div>
        }
        .into_any(),
        GuardView::Content => children().into_any(),
        GuardView::Nothing => ().into_any(),
    }
}
