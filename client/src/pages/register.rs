//! Account creation page (bare layout).

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use models::Registration;

use crate::state::auth::AuthState;

/// Minimum password length accepted by the identity provider.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Check a registration form before it is sent.
///
/// # Errors
///
/// Returns a user-facing message for the first problem found.
pub fn validate_registration(form: &Registration, confirm: &str) -> Result<(), String> {
    if form.name.trim().is_empty() {
        return Err("Enter your name.".to_owned());
    }
    if !form.email.contains('@') {
        return Err("Enter a valid email.".to_owned());
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters."));
    }
    if form.password != confirm {
        return Err("Passwords do not match.".to_owned());
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let license = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = Registration {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            phone: phone.get().trim().to_owned(),
            driving_license: license.get().trim().to_owned(),
        };
        if let Err(e) = validate_registration(&form, &confirm.get()) {
            info.set(e);
            return;
        }
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&form).await {
                    Ok(user) => {
                        auth.update(|s| s.resolve(Some(user)));
                        navigate("/account", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Registration failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (form, auth, &navigate);
    };

    let field = move |label: &'static str, kind: &'static str, signal: RwSignal<String>| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=label
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <A href="/" attr:class="auth-card__brand">"DriveAway"</A>
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {field("Full name", "text", name)}
                    {field("Email", "email", email)}
                    {field("Phone", "tel", phone)}
                    {field("Driving license number", "text", license)}
                    {field("Password", "password", password)}
                    {field("Confirm password", "password", confirm)}
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "register_test.rs"]
mod tests;
