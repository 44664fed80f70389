//! Card with a glow that follows the pointer.

use leptos::prelude::*;

use crate::util::spotlight::{DEFAULT_SPOTLIGHT_COLOR, Spotlight};

#[component]
pub fn SpotlightCard(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(default = DEFAULT_SPOTLIGHT_COLOR)] color: &'static str,
) -> impl IntoView {
    let spot = RwSignal::new(Spotlight::default());

    view! {
        <div
            class=format!("spotlight-card {class}")
            on:mousemove=move |ev: leptos::ev::MouseEvent| {
                spot.update(|s| s.track(f64::from(ev.offset_x()), f64::from(ev.offset_y())));
            }
            on:mouseenter=move |_| spot.update(Spotlight::enter)
            on:mouseleave=move |_| spot.update(Spotlight::leave)
        >
            <div class="spotlight-card__glow" aria-hidden="true" style=move || spot.get().style(color)></div>
            {children()}
        </div>
    }
}
