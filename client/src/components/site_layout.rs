//! Page frame that decides whether the shared chrome is shown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route inside the router. Header and footer are toggled from
//! the current pathname through `layout::shows_chrome`; the routed content
//! itself is rendered once and never rebuilt by a chrome change.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::layout::shows_chrome;

/// Header + content + footer, or bare content on auth/account/admin paths.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let location = use_location();
    let chrome = Memo::new(move |_| shows_chrome(&location.pathname.get()));

    view! {
        <Show when=move || chrome.get()>
            <Header/>
        </Show>
        {children()}
        <Show when=move || chrome.get()>
            <Footer/>
        </Show>
    }
}
