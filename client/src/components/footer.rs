//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__links">
                <a href="/cars">"Browse cars"</a>
                <a href="/account">"My bookings"</a>
            </div>
            <p class="site-footer__note">"DriveAway car rental. Prices include taxes and basic insurance."</p>
        </footer>
    }
}
