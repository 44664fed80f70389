//! Sign-out control shared by the site header and the bare account bar.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

#[cfg(test)]
#[path = "sign_out_button_test.rs"]
mod sign_out_button_test;

#[component]
pub fn SignOutButton(class: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        sign_out(auth);
    };

    view! {
        <button type="button" class=class on:click=on_click>
            "Sign out"
        </button>
    }
}
