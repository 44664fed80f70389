//! Signed-in user's profile and bookings (bare layout, guarded).

use leptos::prelude::*;
use leptos_router::components::A;
use models::{Booking, ProfileUpdate, User};

use crate::components::require_auth::RequireAuth;
use crate::components::sign_out_button::SignOutButton;
use crate::pages::cars::load_catalog;
use crate::state::catalog::CatalogState;
use crate::util::format;

#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <div class="account-page">
            <header class="account-page__bar">
                <A href="/" attr:class="account-page__brand">"DriveAway"</A>
                <A href="/cars">"Browse cars"</A>
                <SignOutButton class="account-page__sign-out"/>
            </header>
            <RequireAuth>
                <ProfilePanel/>
                <BookingsPanel/>
            </RequireAuth>
        </div>
    }
}

#[component]
fn ProfilePanel() -> impl IntoView {
    let user = RwSignal::new(None::<User>);
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let license = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(profile) = crate::net::api::fetch_account().await {
            name.set(profile.name.clone());
            phone.set(profile.phone.clone());
            license.set(profile.driving_license.clone());
            user.set(Some(profile));
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let update = ProfileUpdate {
            name: Some(name.get().trim().to_owned()).filter(|v| !v.is_empty()),
            phone: Some(phone.get().trim().to_owned()),
            driving_license: Some(license.get().trim().to_owned()),
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_account(&update).await {
                Ok(saved) => {
                    user.set(Some(saved));
                    info.set("Profile saved.".to_owned());
                }
                Err(e) => info.set(format!("Save failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = update;
    };

    view! {
        <section class="account-card">
            <h2>"Your profile"</h2>
            <p class="account-card__email">{move || user.with(|u| u.as_ref().map(|u| u.email.clone()))}</p>
            <form class="account-form" on:submit=on_save>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Phone"
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Driving license"
                    <input
                        type="text"
                        prop:value=move || license.get()
                        on:input=move |ev| license.set(event_target_value(&ev))
                    />
                </label>
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="account-card__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}

#[component]
fn BookingsPanel() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    load_catalog(catalog);

    let bookings = RwSignal::new(Vec::<Booking>::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_my_bookings().await {
            Ok(list) => bookings.set(list),
            Err(e) => error.set(Some(e)),
        }
    });

    let car_name = move |car_id: &str| {
        catalog.with(|s| s.find(car_id).map_or_else(|| car_id.to_owned(), models::Car::display_name))
    };

    view! {
        <section class="account-card">
            <h2>"Your bookings"</h2>
            {move || error.get().map(|e| view! { <p class="page__error">{e}</p> })}
            <Show
                when=move || bookings.with(|b| !b.is_empty())
                fallback=|| view! { <p class="page__status">"No bookings yet."</p> }
            >
                <table class="bookings-table">
                    <thead>
                        <tr>
                            <th>"Car"</th>
                            <th>"Dates"</th>
                            <th>"Total"</th>
                            <th>"Status"</th>
                            <th>"Payment"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || bookings.get()
                            key=|b| b.id.clone()
                            children=move |b: Booking| {
                                let car_id = b.car_id.clone();
                                view! {
                                    <tr>
                                        <td>{move || car_name(&car_id)}</td>
                                        <td>{format!("{} to {}", format::date_only(&b.start_date), format::date_only(&b.end_date))}</td>
                                        <td>{format::price(b.total_price)}</td>
                                        <td>{b.status.label()}</td>
                                        <td>{b.payment_status.label()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
