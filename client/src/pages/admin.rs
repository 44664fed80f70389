//! Fleet and booking administration (bare layout, admin only).
//!
//! SYSTEM CONTEXT
//! ==============
//! Writes go through `/api/admin/*`, which re-checks the admin role. The
//! shared catalog is patched in place after each successful write so the
//! public listing stays current without a refetch.

use leptos::prelude::*;
use leptos_router::components::A;
use models::{Booking, BookingStatusUpdate, Car, CarCategory, FuelType, Transmission};

use crate::components::require_auth::RequireAdmin;
use crate::pages::cars::load_catalog;
use crate::state::catalog::CatalogState;
use crate::state::forms::{
    CarDraft, booking_status_from_value, booking_status_value, category_from_value, category_value,
    payment_status_from_value, payment_status_value,
};
use crate::util::format;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <header class="admin-page__bar">
                <A href="/" attr:class="admin-page__brand">"DriveAway admin"</A>
                <A href="/cars">"View site"</A>
            </header>
            <RequireAdmin>
                <FleetPanel/>
                <NewCarPanel/>
                <BookingAdminPanel/>
            </RequireAdmin>
        </div>
    }
}

// =============================================================================
// FLEET
// =============================================================================

#[component]
fn FleetPanel() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    load_catalog(catalog);
    let info = RwSignal::new(String::new());

    let on_delete = move |car_id: String| {
        info.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::admin_delete_car(&car_id).await {
                Ok(()) => catalog.update(|s| s.remove(&car_id)),
                Err(e) => info.set(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = car_id;
    };

    view! {
        <section class="admin-card">
            <h2>"Fleet"</h2>
            <Show when=move || !info.get().is_empty()>
                <p class="page__error">{move || info.get()}</p>
            </Show>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Car"</th>
                        <th>"Category"</th>
                        <th>"Per day"</th>
                        <th>"Location"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || catalog.with(|s| s.cars.clone())
                        key=|car| car.id.clone()
                        children=move |car: Car| {
                            let id = car.id.clone();
                            view! {
                                <tr>
                                    <td>{car.display_name()}</td>
                                    <td>{car.category.label()}</td>
                                    <td>{format::price(car.price_per_day)}</td>
                                    <td>{car.location.clone()}</td>
                                    <td>
                                        <button
                                            class="button button--danger"
                                            on:click=move |_| on_delete(id.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn NewCarPanel() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let draft = RwSignal::new(CarDraft::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let new_car = match draft.with(CarDraft::to_new_car) {
            Ok(car) => car,
            Err(e) => {
                info.set(e);
                return;
            }
        };
        busy.set(true);
        info.set("Adding car...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::admin_create_car(&new_car).await {
                Ok(car) => {
                    info.set(format!("Added {}.", car.display_name()));
                    catalog.update(|s| s.insert(car));
                    draft.set(CarDraft::default());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (new_car, catalog);
    };

    // Text inputs bound to one draft field each.
    let text = move |label: &'static str, get: fn(&CarDraft) -> &String, set: fn(&mut CarDraft, String)| {
        view! {
            <label>
                {label}
                <input
                    type="text"
                    prop:value=move || draft.with(|d| get(d).clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| set(d, value));
                    }
                />
            </label>
        }
    };

    view! {
        <section class="admin-card">
            <h2>"Add a car"</h2>
            <form class="admin-form" on:submit=on_submit>
                {text("Brand", |d| &d.brand, |d, v| d.brand = v)}
                {text("Model", |d| &d.model, |d, v| d.model = v)}
                {text("Year", |d| &d.year, |d, v| d.year = v)}
                {text("Color", |d| &d.color, |d, v| d.color = v)}
                {text("Price per day", |d| &d.price_per_day, |d, v| d.price_per_day = v)}
                {text("Price per week", |d| &d.price_per_week, |d, v| d.price_per_week = v)}
                {text("Price per month", |d| &d.price_per_month, |d, v| d.price_per_month = v)}
                {text("Original daily price", |d| &d.original_price, |d, v| d.original_price = v)}
                {text("Seats", |d| &d.seats, |d, v| d.seats = v)}
                {text("Doors", |d| &d.doors, |d, v| d.doors = v)}
                {text("Available from", |d| &d.available_from, |d, v| d.available_from = v)}
                {text("Available to", |d| &d.available_to, |d, v| d.available_to = v)}
                {text("Features (comma separated)", |d| &d.features, |d, v| d.features = v)}
                {text("Location", |d| &d.location, |d, v| d.location = v)}
                <label>
                    "Category"
                    <select on:change=move |ev| {
                        if let Some(category) = category_from_value(&event_target_value(&ev)) {
                            draft.update(|d| d.category = category);
                        }
                    }>
                        {CarCategory::ALL
                            .into_iter()
                            .map(|c| view! {
                                <option value={category_value(c)} selected=move || draft.with(|d| d.category == c)>
                                    {c.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Fuel"
                    <select on:change=move |ev| {
                        let fuel = match event_target_value(&ev).as_str() {
                            "diesel" => FuelType::Diesel,
                            "electric" => FuelType::Electric,
                            "hybrid" => FuelType::Hybrid,
                            _ => FuelType::Petrol,
                        };
                        draft.update(|d| d.fuel_type = fuel);
                    }>
                        <option value="petrol">"Petrol"</option>
                        <option value="diesel">"Diesel"</option>
                        <option value="electric">"Electric"</option>
                        <option value="hybrid">"Hybrid"</option>
                    </select>
                </label>
                <label>
                    "Transmission"
                    <select on:change=move |ev| {
                        let transmission = if event_target_value(&ev) == "manual" {
                            Transmission::Manual
                        } else {
                            Transmission::Automatic
                        };
                        draft.update(|d| d.transmission = transmission);
                    }>
                        <option value="automatic">"Automatic"</option>
                        <option value="manual">"Manual"</option>
                    </select>
                </label>
                <label>
                    "Image URLs (one per line)"
                    <textarea
                        prop:value=move || draft.with(|d| d.images.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.images = value);
                        }
                    ></textarea>
                </label>
                <label>
                    "Description"
                    <textarea
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.description = value);
                        }
                    ></textarea>
                </label>
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    "Add car"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="admin-card__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}

// =============================================================================
// BOOKINGS
// =============================================================================

#[component]
fn BookingAdminPanel() -> impl IntoView {
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::admin_fetch_bookings().await {
            Ok(list) => bookings.set(list),
            Err(e) => error.set(Some(e)),
        }
    });

    let apply = move |booking_id: String, update: BookingStatusUpdate| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::admin_update_booking(&booking_id, &update).await {
                Ok(saved) => bookings.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|b| b.id == saved.id) {
                        *slot = saved;
                    }
                }),
                Err(e) => error.set(Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (booking_id, update);
    };

    view! {
        <section class="admin-card">
            <h2>"Bookings"</h2>
            {move || error.get().map(|e| view! { <p class="page__error">{e}</p> })}
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Booking"</th>
                        <th>"Car"</th>
                        <th>"User"</th>
                        <th>"Dates"</th>
                        <th>"Total"</th>
                        <th>"Status"</th>
                        <th>"Payment"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || bookings.get()
                        key=|b| (b.id.clone(), b.status, b.payment_status)
                        children=move |b: Booking| {
                            let status_id = b.id.clone();
                            let payment_id = b.id.clone();
                            view! {
                                <tr>
                                    <td>{b.id.clone()}</td>
                                    <td>{b.car_id.clone()}</td>
                                    <td>{b.user_id.clone()}</td>
                                    <td>{format!("{} to {}", format::date_only(&b.start_date), format::date_only(&b.end_date))}</td>
                                    <td>{format::price(b.total_price)}</td>
                                    <td>
                                        <select on:change=move |ev| {
                                            if let Some(status) = booking_status_from_value(&event_target_value(&ev)) {
                                                apply(
                                                    status_id.clone(),
                                                    BookingStatusUpdate { status: Some(status), payment_status: None },
                                                );
                                            }
                                        }>
                                            {models::BookingStatus::ALL
                                                .into_iter()
                                                .map(|s| view! {
                                                    <option value={booking_status_value(s)} selected={s == b.status}>
                                                        {s.label()}
                                                    </option>
                                                })
                                                .collect_view()}
                                        </select>
                                    </td>
                                    <td>
                                        <select on:change=move |ev| {
                                            if let Some(payment) = payment_status_from_value(&event_target_value(&ev)) {
                                                apply(
                                                    payment_id.clone(),
                                                    BookingStatusUpdate { status: None, payment_status: Some(payment) },
                                                );
                                            }
                                        }>
                                            {models::PaymentStatus::ALL
                                                .into_iter()
                                                .map(|p| view! {
                                                    <option value={payment_status_value(p)} selected={p == b.payment_status}>
                                                        {p.label()}
                                                    </option>
                                                })
                                                .collect_view()}
                                        </select>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
