//! Site header with primary navigation and the account menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::{AuthState, AuthStatus};
use crate::components::sign_out_button::SignOutButton;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let status = move || auth.with(AuthState::status);
    let is_admin = move || auth.with(AuthState::is_admin);
    let user_name = move || auth.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">"DriveAway"</A>
            <nav class="site-header__nav">
                <A href="/cars">"Cars"</A>
                <Show when=is_admin>
                    <A href="/admin">"Admin"</A>
                </Show>
            </nav>
            <div class="site-header__account">
                {move || match status() {
                    AuthStatus::Loading => view! { <span class="site-header__pending"></span> }.into_any(),
                    AuthStatus::Authenticated => view! {
                        <A href="/account">{user_name}</A>
                        <SignOutButton class="site-header__sign-out"/>
                    }
                    .into_any(),
                    AuthStatus::Unauthenticated => view! {
                        <A href="/login">"Sign in"</A>
                        <A href="/register" attr:class="button button--primary">"Register"</A>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}
