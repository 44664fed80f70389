//! Administrator routes for the fleet and booking statuses.
//!
//! Every handler takes [`AdminUser`], so non-admins get 403 before any work.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use models::{Booking, BookingStatusUpdate, Car, NewCar};

use crate::routes::auth::AdminUser;
use crate::routes::bookings::booking_error_to_status;
use crate::routes::cars::car_error_to_status;
use crate::services::{bookings, cars};
use crate::state::AppState;

/// `POST /api/admin/cars`: add a car.
pub async fn create_car(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(new_car): Json<NewCar>,
) -> Result<(StatusCode, Json<Car>), StatusCode> {
    let car = cars::create_car(state.store.as_ref(), &state.images, new_car)
        .await
        .map_err(car_error_to_status)?;
    tracing::info!(admin = %admin.email, car_id = %car.id, "admin added car");
    Ok((StatusCode::CREATED, Json(car)))
}

/// `DELETE /api/admin/cars/{id}`: remove a car.
pub async fn delete_car(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(car_id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    cars::delete_car(state.store.as_ref(), &car_id)
        .await
        .map_err(car_error_to_status)?;
    tracing::info!(admin = %admin.email, %car_id, "admin removed car");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/admin/bookings`: every booking, newest first.
pub async fn list_bookings(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<Booking>>, StatusCode> {
    let list = bookings::list_all_bookings(state.store.as_ref())
        .await
        .map_err(booking_error_to_status)?;
    Ok(Json(list))
}

/// `PATCH /api/admin/bookings/{id}`: set booking and/or payment status.
pub async fn update_booking(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(booking_id): Path<String>,
    Json(update): Json<BookingStatusUpdate>,
) -> Result<Json<Booking>, StatusCode> {
    let booking = bookings::update_booking_status(state.store.as_ref(), &booking_id, update)
        .await
        .map_err(booking_error_to_status)?;
    Ok(Json(booking))
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
