//! Fleet listing page.

use leptos::prelude::*;
use models::Car;

use crate::components::car_card::CarCard;
use crate::state::catalog::CatalogState;

/// Start the catalog fetch if nothing has been loaded yet.
///
/// Safe to call from every page that shows cars; in-flight and completed
/// fetches are not repeated.
pub(crate) fn load_catalog(catalog: RwSignal<CatalogState>) {
    if !catalog.with_untracked(CatalogState::needs_fetch) {
        return;
    }
    catalog.update(CatalogState::begin_fetch);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_cars().await;
        if let Err(e) = &result {
            log::warn!("catalog fetch failed: {e}");
        }
        catalog.update(|state| state.finish_fetch(result));
    });
}

/// Grid of car cards, shared by the listing and home pages.
#[component]
pub fn CarGrid(#[prop(into)] cars: Signal<Vec<Car>>) -> impl IntoView {
    view! {
        <div class="car-grid">
            <For
                each=move || cars.get()
                key=|car| car.id.clone()
                children=move |car: Car| view! { <CarCard car=car/> }
            />
        </div>
    }
}

#[component]
pub fn CarsPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    load_catalog(catalog);

    let cars = Signal::derive(move || catalog.with(|s| s.cars.clone()));
    let loading = move || catalog.with(|s| s.loading);
    let error = move || catalog.with(|s| s.error.clone());
    let empty = move || catalog.with(|s| s.loaded && s.cars.is_empty());

    view! {
        <main class="page cars-page">
            <header class="page__header">
                <h1>"Our fleet"</h1>
                <p>"Pick a car, choose your dates and drive."</p>
            </header>
            <Show when=loading>
                <p class="page__status">"Loading cars..."</p>
            </Show>
            {move || error().map(|e| view! { <p class="page__error">{e}</p> })}
            <Show when=empty>
                <p class="page__status">"No cars are listed right now."</p>
            </Show>
            <CarGrid cars=cars/>
        </main>
    }
}
