//! Public fleet routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use models::Car;

use crate::services::cars::{self, CarError};
use crate::state::AppState;

/// `GET /api/cars`: every car, ordered by brand then model.
pub async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, StatusCode> {
    let cars = cars::list_cars(state.store.as_ref())
        .await
        .map_err(car_error_to_status)?;
    Ok(Json(cars))
}

/// `GET /api/cars/{id}`: one car.
pub async fn get_car(State(state): State<AppState>, Path(car_id): Path<String>) -> Result<Json<Car>, StatusCode> {
    let car = cars::get_car(state.store.as_ref(), &car_id)
        .await
        .map_err(car_error_to_status)?;
    Ok(Json(car))
}

pub(crate) fn car_error_to_status(err: CarError) -> StatusCode {
    match err {
        CarError::NotFound(_) => StatusCode::NOT_FOUND,
        CarError::ImageNotAllowed(_) | CarError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CarError::Baas(e) => {
            tracing::error!(error = %e, "car storage failure");
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
#[path = "cars_test.rs"]
mod tests;
