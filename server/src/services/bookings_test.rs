use time::macros::datetime;

use super::*;
use crate::state::test_helpers::{seed_car, seed_user, test_app_state};

fn request(car_id: &str, start: &str, end: &str) -> NewBooking {
    NewBooking { car_id: car_id.to_owned(), start_date: start.to_owned(), end_date: end.to_owned() }
}

const NOW: OffsetDateTime = datetime!(2024-05-01 10:00 UTC);

// =============================================================================
// dates
// =============================================================================

#[test]
fn parse_date_accepts_date_and_timestamp() {
    assert_eq!(parse_date("2024-05-03").unwrap(), time::macros::date!(2024 - 05 - 03));
    assert_eq!(parse_date("2024-05-03T12:00:00Z").unwrap(), time::macros::date!(2024 - 05 - 03));
}

#[test]
fn parse_date_rejects_garbage() {
    assert!(matches!(parse_date("tomorrow"), Err(BookingError::InvalidDates(_))));
    assert!(matches!(parse_date("2024-13-01"), Err(BookingError::InvalidDates(_))));
    assert!(matches!(parse_date(""), Err(BookingError::InvalidDates(_))));
}

#[test]
fn rental_days_counts_nights() {
    assert_eq!(rental_days("2024-05-01", "2024-05-04").unwrap(), 3);
    assert_eq!(rental_days("2024-02-28", "2024-03-01").unwrap(), 2);
}

#[test]
fn rental_days_requires_end_after_start() {
    assert!(matches!(rental_days("2024-05-04", "2024-05-04"), Err(BookingError::InvalidDates(_))));
    assert!(matches!(rental_days("2024-05-04", "2024-05-01"), Err(BookingError::InvalidDates(_))));
}

// =============================================================================
// create
// =============================================================================

#[tokio::test]
async fn create_prices_with_tiers_and_starts_pending() {
    let state = test_app_state();
    let car = seed_car(&state, "Kia", "Picanto").await;
    let user = seed_user(&state, "ana@example.com").await;

    // 1 week + 2 days at 300/week and 50/day.
    let booking = create_booking(state.store.as_ref(), &user.id, request(&car.id, "2024-06-01", "2024-06-10"), NOW)
        .await
        .unwrap();
    assert!((booking.total_price - 400.0).abs() < f64::EPSILON);
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.payment_status, PaymentStatus::Pending);
    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.created_at, "2024-05-01T10:00:00Z");
    assert!(!booking.id.is_empty());
}

#[tokio::test]
async fn create_appends_to_user_back_reference() {
    let state = test_app_state();
    let car = seed_car(&state, "Kia", "Picanto").await;
    let user = seed_user(&state, "ana@example.com").await;
    let store = state.store.as_ref();

    let first = create_booking(store, &user.id, request(&car.id, "2024-06-01", "2024-06-02"), NOW).await.unwrap();
    let second = create_booking(store, &user.id, request(&car.id, "2024-07-01", "2024-07-02"), NOW).await.unwrap();

    let profile: User = baas::get_as(store, collections::USERS, &user.id).await.unwrap();
    assert_eq!(profile.bookings, Some(vec![first.id, second.id]));
}

#[tokio::test]
async fn create_without_profile_still_books() {
    let state = test_app_state();
    let car = seed_car(&state, "Kia", "Picanto").await;
    let booking = create_booking(state.store.as_ref(), "no-profile", request(&car.id, "2024-06-01", "2024-06-03"), NOW)
        .await
        .unwrap();
    assert!((booking.total_price - 100.0).abs() < f64::EPSILON);
}

/// Memory store whose writes to `users` fail, as a flaky backend would.
struct UsersWriteFails(crate::baas::memory::MemoryStore);

#[async_trait::async_trait]
impl DocumentStore for UsersWriteFails {
    async fn list(&self, collection: &str) -> Result<Vec<(String, serde_json::Value)>, BaasError> {
        self.0.list(collection).await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<serde_json::Value>, BaasError> {
        self.0.get(collection, id).await
    }

    async fn create(&self, collection: &str, value: serde_json::Value) -> Result<String, BaasError> {
        self.0.create(collection, value).await
    }

    async fn put(&self, collection: &str, id: &str, value: serde_json::Value) -> Result<(), BaasError> {
        if collection == collections::USERS {
            return Err(BaasError::Upstream { status: 503, message: "unavailable".to_owned() });
        }
        self.0.put(collection, id, value).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), BaasError> {
        self.0.delete(collection, id).await
    }
}

#[tokio::test]
async fn back_reference_failure_still_returns_the_stored_booking() {
    let inner = crate::baas::memory::MemoryStore::new();
    let car_id = inner
        .create(collections::CARS, baas::encode_doc(&crate::state::test_helpers::new_car("Kia", "Picanto")).unwrap())
        .await
        .unwrap();
    inner
        .put(collections::USERS, "u1", serde_json::json!({ "name": "Ana", "email": "ana@example.com" }))
        .await
        .unwrap();
    let store = UsersWriteFails(inner);

    let booking = create_booking(&store, "u1", request(&car_id, "2024-06-01", "2024-06-03"), NOW).await.unwrap();

    let stored = list_all_bookings(&store).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, booking.id);
    let profile: User = baas::get_as(&store, collections::USERS, "u1").await.unwrap();
    assert_eq!(profile.bookings, None);
}

#[tokio::test]
async fn overlapping_bookings_are_accepted() {
    let state = test_app_state();
    let car = seed_car(&state, "Kia", "Picanto").await;
    let store = state.store.as_ref();
    create_booking(store, "u1", request(&car.id, "2024-06-01", "2024-06-05"), NOW).await.unwrap();
    create_booking(store, "u2", request(&car.id, "2024-06-02", "2024-06-04"), NOW).await.unwrap();
    assert_eq!(list_all_bookings(store).await.unwrap().len(), 2);
}

#[tokio::test]
async fn create_rejects_unknown_car_and_bad_range() {
    let state = test_app_state();
    let store = state.store.as_ref();
    let err = create_booking(store, "u1", request("ghost", "2024-06-01", "2024-06-02"), NOW).await.unwrap_err();
    assert!(matches!(err, BookingError::CarNotFound(ref id) if id == "ghost"));

    let car = seed_car(&state, "Kia", "Picanto").await;
    let err = create_booking(store, "u1", request(&car.id, "2024-06-02", "2024-06-01"), NOW).await.unwrap_err();
    assert!(matches!(err, BookingError::InvalidDates(_)));
    assert!(list_all_bookings(store).await.unwrap().is_empty());
}

// =============================================================================
// list / update
// =============================================================================

#[tokio::test]
async fn user_listing_filters_and_sorts_newest_first() {
    let state = test_app_state();
    let car = seed_car(&state, "Kia", "Picanto").await;
    let store = state.store.as_ref();

    let older = create_booking(store, "u1", request(&car.id, "2024-06-01", "2024-06-02"), NOW).await.unwrap();
    let later = datetime!(2024-05-02 09:00 UTC);
    let newer = create_booking(store, "u1", request(&car.id, "2024-08-01", "2024-08-02"), later).await.unwrap();
    create_booking(store, "u2", request(&car.id, "2024-06-01", "2024-06-02"), NOW).await.unwrap();

    let mine: Vec<String> = list_user_bookings(store, "u1").await.unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(mine, [newer.id, older.id]);
    assert_eq!(list_all_bookings(store).await.unwrap().len(), 3);
}

#[tokio::test]
async fn update_status_allows_any_transition() {
    let state = test_app_state();
    let car = seed_car(&state, "Kia", "Picanto").await;
    let store = state.store.as_ref();
    let booking = create_booking(store, "u1", request(&car.id, "2024-06-01", "2024-06-02"), NOW).await.unwrap();

    let completed = update_booking_status(
        store,
        &booking.id,
        BookingStatusUpdate { status: Some(BookingStatus::Completed), payment_status: None },
    )
    .await
    .unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);
    assert_eq!(completed.payment_status, PaymentStatus::Pending);

    // Straight back to pending, and payment refunded without ever being paid.
    let reverted = update_booking_status(
        store,
        &booking.id,
        BookingStatusUpdate { status: Some(BookingStatus::Pending), payment_status: Some(PaymentStatus::Refunded) },
    )
    .await
    .unwrap();
    assert_eq!(reverted.status, BookingStatus::Pending);
    assert_eq!(reverted.payment_status, PaymentStatus::Refunded);

    let stored = list_user_bookings(store, "u1").await.unwrap();
    assert_eq!(stored[0], reverted);
}

#[tokio::test]
async fn update_status_unknown_booking() {
    let state = test_app_state();
    let err = update_booking_status(state.store.as_ref(), "ghost", BookingStatusUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::NotFound(_)));
}
