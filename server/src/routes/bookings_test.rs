use super::*;
use crate::state::test_helpers::{seed_car, seed_user, test_app_state};

async fn signed_in(state: &AppState, email: &str) -> AuthUser {
    let user = seed_user(state, email).await;
    let token = state.sessions.create(user.clone()).await;
    AuthUser { user, token }
}

fn request(car_id: &str) -> NewBooking {
    NewBooking { car_id: car_id.to_owned(), start_date: "2024-06-01".to_owned(), end_date: "2024-06-04".to_owned() }
}

#[tokio::test]
async fn create_returns_created_booking() {
    let state = test_app_state();
    let car = seed_car(&state, "Fiat", "500").await;
    let auth = signed_in(&state, "ana@example.com").await;
    let user_id = auth.user.id.clone();

    let (status, Json(booking)) = create_booking(State(state), auth, Json(request(&car.id))).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(booking.user_id, user_id);
    assert!((booking.total_price - 150.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn list_only_returns_callers_bookings() {
    let state = test_app_state();
    let car = seed_car(&state, "Fiat", "500").await;
    let ana = signed_in(&state, "ana@example.com").await;
    let bob = signed_in(&state, "bob@example.com").await;
    let ana_again = AuthUser { user: ana.user.clone(), token: ana.token.clone() };

    create_booking(State(state.clone()), ana, Json(request(&car.id))).await.unwrap();
    let Json(bob_list) = list_my_bookings(State(state.clone()), bob).await.unwrap();
    assert!(bob_list.is_empty());

    let Json(ana_list) = list_my_bookings(State(state), ana_again).await.unwrap();
    assert_eq!(ana_list.len(), 1);
}

#[tokio::test]
async fn unknown_car_is_not_found() {
    let state = test_app_state();
    let auth = signed_in(&state, "ana@example.com").await;
    let err = create_booking(State(state), auth, Json(request("ghost"))).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bad_dates_are_unprocessable() {
    let state = test_app_state();
    let car = seed_car(&state, "Fiat", "500").await;
    let auth = signed_in(&state, "ana@example.com").await;
    let mut body = request(&car.id);
    body.end_date = body.start_date.clone();
    let err = create_booking(State(state), auth, Json(body)).await.unwrap_err();
    assert_eq!(err, StatusCode::UNPROCESSABLE_ENTITY);
}
