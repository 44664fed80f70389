//! Booking creation, listing and administrative status changes.
//!
//! DESIGN
//! ======
//! There is no booking engine: overlapping bookings and availability windows
//! are not checked. A booking only needs an existing car and a non-empty date
//! range. The total is fixed at creation from the car's pricing tiers, and
//! the new id is appended to the user's `bookings` back-reference, which is a
//! denormalized convenience. The `bookings` collection stays authoritative.

use models::{Booking, BookingStatus, BookingStatusUpdate, Car, NewBooking, PaymentStatus, User};
use time::{Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description};

use crate::baas::{self, BaasError, DocumentStore, collections};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("car not found: {0}")]
    CarNotFound(String),
    #[error("booking not found: {0}")]
    NotFound(String),
    #[error("invalid dates: {0}")]
    InvalidDates(String),
    #[error(transparent)]
    Baas(#[from] BaasError),
}

/// Parse the date part of an ISO-8601 date or timestamp.
pub(crate) fn parse_date(raw: &str) -> Result<Date, BookingError> {
    let raw = raw.trim();
    let day = raw.get(..10).unwrap_or(raw);
    Date::parse(day, &format_description!("[year]-[month]-[day]"))
        .map_err(|_| BookingError::InvalidDates(format!("not a date: {raw:?}")))
}

/// Number of rental days between pickup and return.
pub(crate) fn rental_days(start: &str, end: &str) -> Result<u32, BookingError> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    if end <= start {
        return Err(BookingError::InvalidDates("return date must be after pickup date".to_owned()));
    }
    u32::try_from((end - start).whole_days())
        .map_err(|_| BookingError::InvalidDates("date range too long".to_owned()))
}

/// Book a car for `user_id`.
///
/// # Errors
///
/// [`BookingError::CarNotFound`] for an unknown car, [`BookingError::InvalidDates`]
/// for an empty or unparsable range, otherwise backend failures.
pub async fn create_booking(
    store: &dyn DocumentStore,
    user_id: &str,
    request: NewBooking,
    now: OffsetDateTime,
) -> Result<Booking, BookingError> {
    let car: Car = match baas::get_as(store, collections::CARS, &request.car_id).await {
        Ok(car) => car,
        Err(BaasError::NotFound { .. }) => return Err(BookingError::CarNotFound(request.car_id)),
        Err(e) => return Err(e.into()),
    };
    let days = rental_days(&request.start_date, &request.end_date)?;

    let mut booking = Booking {
        id: String::new(),
        car_id: car.id.clone(),
        user_id: user_id.to_owned(),
        start_date: request.start_date.trim().to_owned(),
        end_date: request.end_date.trim().to_owned(),
        total_price: car.rental_total(days),
        status: BookingStatus::Pending,
        payment_status: PaymentStatus::Pending,
        created_at: now.format(&Rfc3339).map_err(|e| BaasError::Decode(e.to_string()))?,
    };
    booking.id = store
        .create(collections::BOOKINGS, baas::encode_doc(&booking)?)
        .await?;
    tracing::info!(booking_id = %booking.id, car_id = %booking.car_id, %user_id, days, "booking created");

    // The booking is stored at this point; back-reference failures are logged, not returned.
    if let Err(e) = append_user_booking(store, user_id, &booking.id).await {
        tracing::error!(error = %e, %user_id, booking_id = %booking.id, "failed to record booking on profile");
    }
    Ok(booking)
}

async fn append_user_booking(store: &dyn DocumentStore, user_id: &str, booking_id: &str) -> Result<(), BookingError> {
    let mut user: User = match baas::get_as(store, collections::USERS, user_id).await {
        Ok(user) => user,
        Err(BaasError::NotFound { .. }) => {
            tracing::warn!(%user_id, %booking_id, "no profile document to record booking on");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    user.bookings.get_or_insert_with(Vec::new).push(booking_id.to_owned());
    store
        .put(collections::USERS, user_id, baas::encode_doc(&user)?)
        .await?;
    Ok(())
}

/// Newest first; ties keep id order.
fn sort_newest_first(bookings: &mut [Booking]) {
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
}

/// Bookings made by `user_id`.
///
/// # Errors
///
/// Propagates backend failures.
pub async fn list_user_bookings(store: &dyn DocumentStore, user_id: &str) -> Result<Vec<Booking>, BookingError> {
    let mut bookings: Vec<Booking> = baas::list_as(store, collections::BOOKINGS).await?;
    bookings.retain(|b| b.user_id == user_id);
    sort_newest_first(&mut bookings);
    Ok(bookings)
}

/// Every booking (admin view).
///
/// # Errors
///
/// Propagates backend failures.
pub async fn list_all_bookings(store: &dyn DocumentStore) -> Result<Vec<Booking>, BookingError> {
    let mut bookings: Vec<Booking> = baas::list_as(store, collections::BOOKINGS).await?;
    sort_newest_first(&mut bookings);
    Ok(bookings)
}

/// Set booking and/or payment status. Any declared value may follow any other.
///
/// # Errors
///
/// [`BookingError::NotFound`] for an unknown booking, otherwise backend failures.
pub async fn update_booking_status(
    store: &dyn DocumentStore,
    booking_id: &str,
    update: BookingStatusUpdate,
) -> Result<Booking, BookingError> {
    let mut booking: Booking = match baas::get_as(store, collections::BOOKINGS, booking_id).await {
        Ok(booking) => booking,
        Err(BaasError::NotFound { .. }) => return Err(BookingError::NotFound(booking_id.to_owned())),
        Err(e) => return Err(e.into()),
    };
    if let Some(status) = update.status {
        booking.status = status;
    }
    if let Some(payment) = update.payment_status {
        booking.payment_status = payment;
    }
    store
        .put(collections::BOOKINGS, booking_id, baas::encode_doc(&booking)?)
        .await?;
    tracing::info!(
        %booking_id,
        status = booking.status.label(),
        payment = booking.payment_status.label(),
        "booking status updated"
    );
    Ok(booking)
}

#[cfg(test)]
#[path = "bookings_test.rs"]
mod tests;
