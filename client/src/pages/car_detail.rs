//! Car detail page with the booking form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anyone can view a car. Booking needs a session: signed-out visitors get a
//! sign-in link instead of the form, and the API re-checks the session.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use models::{Booking, Car};

use crate::state::auth::{AuthState, AuthStatus};
use crate::state::catalog::CatalogState;
use crate::state::forms::BookingDraft;
use crate::util::format;

#[component]
pub fn CarDetailPage() -> impl IntoView {
    let params = use_params_map();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let car_id = move || params.with(|p| p.get("id").unwrap_or_default());

    // Serve from the catalog when it is already loaded, otherwise fetch.
    let car = RwSignal::new(None::<Car>);
    let missing = RwSignal::new(false);
    Effect::new(move || {
        let id = car_id();
        if let Some(found) = catalog.with_untracked(|s| s.find(&id).cloned()) {
            car.set(Some(found));
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_car(&id).await;
            missing.set(fetched.is_none());
            car.set(fetched);
        });
    });

    view! {
        <main class="page car-detail">
            <Show when=move || missing.get()>
                <p class="page__error">"This car is no longer listed."</p>
                <A href="/cars">"Back to the fleet"</A>
            </Show>
            {move || car.get().map(|car| view! { <CarDetail car=car/> })}
        </main>
    }
}

#[component]
fn CarDetail(car: Car) -> impl IntoView {
    let name = car.display_name();
    let gallery = car.images.clone();
    let features = car.features.clone();
    let discount = car.discount_percent();

    view! {
        <article class="car-detail__card">
            <div class="car-detail__gallery">
                {gallery
                    .into_iter()
                    .map(|src| view! { <img class="car-detail__image" src=src alt=name.clone()/> })
                    .collect_view()}
            </div>
            <div class="car-detail__info">
                <h1>{name.clone()}</h1>
                <p class="car-detail__meta">
                    {format!("{} · {} · {}", car.year, car.color, car.category.label())}
                </p>
                <p class="car-detail__rating">{format!("{} {:.1}", format::stars(car.rating), car.rating)}</p>
                <p class="car-detail__description">{car.description.clone()}</p>
                <dl class="car-detail__specs">
                    <dt>"Transmission"</dt><dd>{car.transmission.label()}</dd>
                    <dt>"Fuel"</dt><dd>{car.fuel_type.label()}</dd>
                    <dt>"Seats"</dt><dd>{car.seats}</dd>
                    <dt>"Doors"</dt><dd>{car.doors}</dd>
                    <dt>"Location"</dt><dd>{car.location.clone()}</dd>
                    <dt>"Available"</dt>
                    <dd>{format!("{} to {}", format::date_only(&car.available_from), format::date_only(&car.available_to))}</dd>
                </dl>
                <ul class="car-detail__features">
                    {features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                </ul>
                <table class="car-detail__pricing">
                    <tr><th>"Day"</th><td>{format::price(car.price_per_day)}</td></tr>
                    <tr><th>"Week"</th><td>{format::price(car.price_per_week)}</td></tr>
                    <tr><th>"Month"</th><td>{format::price(car.price_per_month)}</td></tr>
                </table>
                {discount.map(|pct| view! { <p class="car-detail__discount">{format!("Save {pct}% on the daily rate")}</p> })}
                <BookingPanel car_id=car.id.clone()/>
            </div>
        </article>
    }
}

#[component]
fn BookingPanel(car_id: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let draft = RwSignal::new(BookingDraft::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let confirmed = RwSignal::new(None::<Booking>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match draft.with(|d| d.to_request(&car_id)) {
            Ok(request) => request,
            Err(e) => {
                info.set(e);
                return;
            }
        };
        busy.set(true);
        info.set("Booking...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_booking(&request).await {
                Ok(booking) => {
                    info.set(String::new());
                    confirmed.set(Some(booking));
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <section class="booking-panel">
            {move || match auth.with(AuthState::status) {
                AuthStatus::Loading => view! { <p class="page__status">"Checking your session..."</p> }.into_any(),
                AuthStatus::Unauthenticated => view! {
                    <p>
                        <A href="/login">"Sign in"</A>
                        " to book this car."
                    </p>
                }
                .into_any(),
                AuthStatus::Authenticated => ().into_any(),
            }}
            <Show when=move || auth.with(|s| s.status() == AuthStatus::Authenticated)>
                <form class="booking-form" on:submit=on_submit.clone()>
                    <label>
                        "Pickup"
                        <input
                            type="date"
                            prop:value=move || draft.with(|d| d.start_date.clone())
                            on:input=move |ev| draft.update(|d| d.start_date = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Return"
                        <input
                            type="date"
                            prop:value=move || draft.with(|d| d.end_date.clone())
                            on:input=move |ev| draft.update(|d| d.end_date = event_target_value(&ev))
                        />
                    </label>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        "Book now"
                    </button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="booking-panel__message">{move || info.get()}</p>
            </Show>
            {move || confirmed.get().map(|b| view! {
                <p class="booking-panel__confirmed">
                    {format!(
                        "Booked {} to {} for {}. Status: {}.",
                        format::date_only(&b.start_date),
                        format::date_only(&b.end_date),
                        format::price(b.total_price),
                        b.status.label(),
                    )}
                </p>
            })}
        </section>
    }
}
