//! Fleet listing and administration.

use models::{Car, NewCar};

use super::images::ImagePolicy;
use crate::baas::{self, BaasError, DocumentStore, collections};

#[derive(Debug, thiserror::Error)]
pub enum CarError {
    #[error("car not found: {0}")]
    NotFound(String),
    #[error("image host not allowed: {0}")]
    ImageNotAllowed(String),
    #[error("invalid car: {0}")]
    Invalid(String),
    #[error(transparent)]
    Baas(#[from] BaasError),
}

/// Every listed car, ordered by brand then model.
///
/// # Errors
///
/// Propagates backend failures.
pub async fn list_cars(store: &dyn DocumentStore) -> Result<Vec<Car>, CarError> {
    let mut cars: Vec<Car> = baas::list_as(store, collections::CARS).await?;
    sort_cars(&mut cars);
    Ok(cars)
}

pub(crate) fn sort_cars(cars: &mut [Car]) {
    cars.sort_by(|a, b| {
        a.brand
            .to_lowercase()
            .cmp(&b.brand.to_lowercase())
            .then_with(|| a.model.to_lowercase().cmp(&b.model.to_lowercase()))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// # Errors
///
/// [`CarError::NotFound`] when no car has `car_id`.
pub async fn get_car(store: &dyn DocumentStore, car_id: &str) -> Result<Car, CarError> {
    match baas::get_as(store, collections::CARS, car_id).await {
        Ok(car) => Ok(car),
        Err(BaasError::NotFound { .. }) => Err(CarError::NotFound(car_id.to_owned())),
        Err(e) => Err(e.into()),
    }
}

/// Add a car to the fleet.
///
/// Only the fields the listing cannot render without are checked; prices,
/// rating and the availability window are stored as given.
///
/// # Errors
///
/// [`CarError::Invalid`] for missing names, [`CarError::ImageNotAllowed`] for
/// an image outside the allow-list, otherwise backend failures.
pub async fn create_car(store: &dyn DocumentStore, images: &ImagePolicy, new_car: NewCar) -> Result<Car, CarError> {
    validate_new_car(&new_car, images)?;
    let id = store
        .create(collections::CARS, baas::encode_doc(&new_car)?)
        .await?;
    tracing::info!(car_id = %id, brand = %new_car.brand, model = %new_car.model, "car added");
    Ok(new_car.with_id(id))
}

pub(crate) fn validate_new_car(new_car: &NewCar, images: &ImagePolicy) -> Result<(), CarError> {
    if new_car.brand.trim().is_empty() || new_car.model.trim().is_empty() {
        return Err(CarError::Invalid("brand and model are required".to_owned()));
    }
    if let Some(url) = images.first_rejected(&new_car.images) {
        return Err(CarError::ImageNotAllowed(url.to_owned()));
    }
    Ok(())
}

/// Remove a car. Existing bookings keep their `car_id`.
///
/// # Errors
///
/// [`CarError::NotFound`] when no car has `car_id`, including ids that could
/// not name a car document at all.
pub async fn delete_car(store: &dyn DocumentStore, car_id: &str) -> Result<(), CarError> {
    if !baas::is_valid_key(car_id) || store.get(collections::CARS, car_id).await?.is_none() {
        return Err(CarError::NotFound(car_id.to_owned()));
    }
    store.delete(collections::CARS, car_id).await?;
    tracing::info!(%car_id, "car removed");
    Ok(())
}

#[cfg(test)]
#[path = "cars_test.rs"]
mod tests;
