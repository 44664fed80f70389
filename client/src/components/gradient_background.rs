//! Animated gradient backdrop for hero sections.

use leptos::prelude::*;

#[component]
pub fn GradientBackground(children: Children) -> impl IntoView {
    view! {
        <div class="gradient-bg">
            <div class="gradient-bg__blob gradient-bg__blob--one" aria-hidden="true"></div>
            <div class="gradient-bg__blob gradient-bg__blob--two" aria-hidden="true"></div>
            <div class="gradient-bg__blob gradient-bg__blob--three" aria-hidden="true"></div>
            <div class="gradient-bg__content">{children()}</div>
        </div>
    }
}
