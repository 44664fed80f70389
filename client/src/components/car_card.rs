//! Listing card for one car.

use leptos::prelude::*;
use models::Car;

use crate::components::spotlight_card::SpotlightCard;
use crate::util::format;

#[component]
pub fn CarCard(car: Car) -> impl IntoView {
    let href = format!("/cars/{}", car.id);
    let name = car.display_name();
    let cover = car.cover_image().map(str::to_owned);
    let discount = car.discount_percent();
    let original = car.original_price.filter(|_| discount.is_some()).map(format::price);
    let daily = format::price(car.price_per_day);
    let rating = format::stars(car.rating);
    let specs = format!(
        "{} · {} · {} seats",
        car.transmission.label(),
        car.fuel_type.label(),
        car.seats
    );

    view! {
        <SpotlightCard class="car-card">
            <a class="car-card__link" href=href>
                <div class="car-card__media">
                    {cover.map(|src| view! { <img class="car-card__image" src=src alt=name.clone() loading="lazy"/> })}
                    <span class="car-card__category">{car.category.label()}</span>
                    {discount.map(|pct| view! { <span class="car-card__discount">{format!("-{pct}%")}</span> })}
                </div>
                <div class="car-card__body">
                    <h3 class="car-card__name">{name.clone()}</h3>
                    <p class="car-card__meta">{format!("{} · {}", car.year, car.location)}</p>
                    <p class="car-card__specs">{specs}</p>
                    <div class="car-card__footer">
                        <span class="car-card__rating" title=format!("{:.1}", car.rating)>{rating}</span>
                        <span class="car-card__price">
                            {original.map(|p| view! { <s class="car-card__original">{p}</s> })}
                            <strong>{daily}</strong>
                            "/day"
                        </span>
                    </div>
                </div>
            </a>
        </SpotlightCard>
    }
}
