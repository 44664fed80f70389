//! Landing page: hero and top-rated cars.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::gradient_background::GradientBackground;
use crate::pages::cars::{CarGrid, load_catalog};
use crate::state::catalog::{CatalogState, FEATURED_COUNT};

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    load_catalog(catalog);

    let featured = Signal::derive(move || catalog.with(|s| s.featured(FEATURED_COUNT)));

    view! {
        <main class="page home-page">
            <GradientBackground>
                <section class="hero">
                    <h1 class="hero__title">"Rent the right car, right now"</h1>
                    <p class="hero__subtitle">"Daily, weekly and monthly rates with no hidden fees."</p>
                    <A href="/cars" attr:class="button button--primary">"Browse the fleet"</A>
                </section>
            </GradientBackground>
            <section class="featured">
                <h2>"Top rated"</h2>
                <CarGrid cars=featured/>
            </section>
        </main>
    }
}
