//! Customer booking routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use models::{Booking, NewBooking};
use time::OffsetDateTime;

use crate::routes::auth::AuthUser;
use crate::services::bookings::{self, BookingError};
use crate::state::AppState;

/// `GET /api/bookings`: the caller's bookings, newest first.
pub async fn list_my_bookings(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<Booking>>, StatusCode> {
    let list = bookings::list_user_bookings(state.store.as_ref(), &auth.user.id)
        .await
        .map_err(booking_error_to_status)?;
    Ok(Json(list))
}

/// `POST /api/bookings`: book a car for the caller.
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<NewBooking>,
) -> Result<(StatusCode, Json<Booking>), StatusCode> {
    let booking = bookings::create_booking(state.store.as_ref(), &auth.user.id, request, OffsetDateTime::now_utc())
        .await
        .map_err(booking_error_to_status)?;
    Ok((StatusCode::CREATED, Json(booking)))
}

pub(crate) fn booking_error_to_status(err: BookingError) -> StatusCode {
    match err {
        BookingError::CarNotFound(_) | BookingError::NotFound(_) => StatusCode::NOT_FOUND,
        BookingError::InvalidDates(_) => StatusCode::UNPROCESSABLE_ENTITY,
        BookingError::Baas(e) => {
            tracing::error!(error = %e, "booking storage failure");
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
#[path = "bookings_test.rs"]
mod tests;
