//! Car catalog state shared by the home and listing pages.
//!
//! DESIGN
//! ======
//! The fleet is fetched once per session and kept in context so navigating
//! between the landing page, the listing and a detail page does not refetch.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use models::Car;

/// Number of cars shown in the landing page's featured strip.
pub const FEATURED_COUNT: usize = 3;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub cars: Vec<Car>,
    pub loading: bool,
    /// Set after the first successful fetch.
    pub loaded: bool,
    pub error: Option<String>,
}

impl CatalogState {
    /// Whether a fetch should be started now.
    #[must_use]
    pub fn needs_fetch(&self) -> bool {
        !self.loading && !self.loaded
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Car>, String>) {
        self.loading = false;
        match result {
            Ok(cars) => {
                self.cars = cars;
                self.loaded = true;
            }
            Err(e) => self.error = Some(e),
        }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == id)
    }

    /// Highest-rated cars, ties kept in catalog order.
    #[must_use]
    pub fn featured(&self, count: usize) -> Vec<Car> {
        let mut cars = self.cars.clone();
        cars.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        cars.truncate(count);
        cars
    }

    pub fn remove(&mut self, id: &str) {
        self.cars.retain(|car| car.id != id);
    }

    pub fn insert(&mut self, car: Car) {
        self.remove(&car.id);
        self.cars.push(car);
    }
}
