//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior without crashing hydration. Error strings are shown to
//! the user as-is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use models::{
    Booking, BookingStatusUpdate, Car, Credentials, NewBooking, NewCar, ProfileUpdate, Registration, SessionUser, User,
};

#[cfg(any(test, feature = "hydrate"))]
fn car_endpoint(car_id: &str) -> String {
    format!("/api/cars/{car_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_car_endpoint(car_id: &str) -> String {
    format!("/api/admin/cars/{car_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_booking_endpoint(booking_id: &str) -> String {
    format!("/api/admin/bookings/{booking_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn failed_message(action: &str, status: u16) -> String {
    match status {
        401 => format!("{action} failed: please sign in again"),
        403 => format!("{action} failed: not allowed"),
        _ => format!("{action} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    action: &str,
    request: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<T, String> {
    let resp = request.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(failed_message(action, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with e-mail and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the request fails or the credentials are rejected.
pub async fn login(credentials: &Credentials) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post("/api/auth/login")
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await;
        read_json("sign in", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an error string if the request fails or the e-mail is taken.
pub async fn register(registration: &Registration) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post("/api/auth/register")
            .json(registration)
            .map_err(|e| e.to_string())?
            .send()
            .await;
        read_json("registration", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = registration;
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Fetch the whole fleet from `/api/cars`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_cars() -> Result<Vec<Car>, String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get("/api/cars").send().await;
        read_json("loading cars", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one car from `/api/cars/{car_id}`.
pub async fn fetch_car(car_id: &str) -> Option<Car> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&car_endpoint(car_id)).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Car>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = car_id;
        None
    }
}

/// Fetch the signed-in user's profile from `/api/account`.
pub async fn fetch_account() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/account").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Update profile fields via `PATCH /api/account`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn update_account(update: &ProfileUpdate) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::patch("/api/account")
            .json(update)
            .map_err(|e| e.to_string())?
            .send()
            .await;
        read_json("saving profile", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err("not available on server".to_owned())
    }
}

/// Fetch the signed-in user's bookings from `/api/bookings`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_my_bookings() -> Result<Vec<Booking>, String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get("/api/bookings").send().await;
        read_json("loading bookings", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Book a car via `POST /api/bookings`.
///
/// # Errors
///
/// Returns an error string if the request fails or the booking is rejected.
pub async fn create_booking(booking: &NewBooking) -> Result<Booking, String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post("/api/bookings")
            .json(booking)
            .map_err(|e| e.to_string())?
            .send()
            .await;
        read_json("booking", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = booking;
        Err("not available on server".to_owned())
    }
}

/// Add a car to the fleet via `POST /api/admin/cars`.
///
/// # Errors
///
/// Returns an error string if the request fails or is not allowed.
pub async fn admin_create_car(car: &NewCar) -> Result<Car, String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post("/api/admin/cars")
            .json(car)
            .map_err(|e| e.to_string())?
            .send()
            .await;
        read_json("adding car", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = car;
        Err("not available on server".to_owned())
    }
}

/// Remove a car via `DELETE /api/admin/cars/{car_id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or is not allowed.
pub async fn admin_delete_car(car_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&admin_car_endpoint(car_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failed_message("removing car", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = car_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch every booking from `/api/admin/bookings`.
///
/// # Errors
///
/// Returns an error string if the request fails or is not allowed.
pub async fn admin_fetch_bookings() -> Result<Vec<Booking>, String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get("/api/admin/bookings").send().await;
        read_json("loading bookings", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Set booking / payment status via `PATCH /api/admin/bookings/{booking_id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or is not allowed.
pub async fn admin_update_booking(booking_id: &str, update: &BookingStatusUpdate) -> Result<Booking, String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::patch(&admin_booking_endpoint(booking_id))
            .json(update)
            .map_err(|e| e.to_string())?
            .send()
            .await;
        read_json("updating booking", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (booking_id, update);
        Err("not available on server".to_owned())
    }
}
