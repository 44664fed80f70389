//! Shared data contracts for the rental site.
//!
//! This crate owns the document shapes exchanged between the `server`, the
//! `client` and the hosted backend. Field names serialize in camelCase to
//! match the stored documents. Nothing here validates values: availability
//! windows, ratings and dates are carried as given.

use serde::{Deserialize, Serialize};

// =============================================================================
// CAR
// =============================================================================

/// Days covered by the monthly pricing tier.
pub const DAYS_PER_MONTH: u32 = 30;

/// Days covered by the weekly pricing tier.
pub const DAYS_PER_WEEK: u32 = 7;

/// Fuel / drivetrain type of a listed car.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Electric => "Electric",
            Self::Hybrid => "Hybrid",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Automatic => "Automatic",
        }
    }
}

/// Fleet category shown as a listing badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarCategory {
    Economy,
    Compact,
    Midsize,
    Suv,
    Luxury,
    Van,
}

impl CarCategory {
    /// Every category, in listing order.
    pub const ALL: [Self; 6] = [Self::Economy, Self::Compact, Self::Midsize, Self::Suv, Self::Luxury, Self::Van];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::Compact => "Compact",
            Self::Midsize => "Midsize",
            Self::Suv => "SUV",
            Self::Luxury => "Luxury",
            Self::Van => "Van",
        }
    }
}

/// A rentable vehicle listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Document identifier assigned by the backend.
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub color: String,
    pub price_per_day: f64,
    pub price_per_week: f64,
    pub price_per_month: f64,
    /// Pre-discount daily price, shown struck through when higher than `price_per_day`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub category: CarCategory,
    pub seats: u8,
    pub doors: u8,
    /// ISO-8601 start of the availability window.
    pub available_from: String,
    /// ISO-8601 end of the availability window.
    pub available_to: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Remote image URLs; hosts are allow-listed by the server.
    #[serde(default)]
    pub images: Vec<String>,
    /// Average review score, expected in `1.0..=5.0`.
    pub rating: f64,
    pub location: String,
    #[serde(default)]
    pub description: String,
}

impl Car {
    /// `"{brand} {model}"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Whole-percent saving of the daily price against `original_price`.
    ///
    /// `None` when no original price is set or it is not above the current price.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price_per_day || original <= 0.0 {
            return None;
        }
        let saving = ((original - self.price_per_day) / original * 100.0).round();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(saving as u32)
    }

    /// Price of renting for `days` days using the pricing tiers.
    ///
    /// Whole 30-day months are charged at the monthly rate, then whole weeks at
    /// the weekly rate, then the remaining days at the daily rate.
    #[must_use]
    pub fn rental_total(&self, days: u32) -> f64 {
        let months = days / DAYS_PER_MONTH;
        let weeks = (days % DAYS_PER_MONTH) / DAYS_PER_WEEK;
        let rest = (days % DAYS_PER_MONTH) % DAYS_PER_WEEK;
        f64::from(months) * self.price_per_month + f64::from(weeks) * self.price_per_week + f64::from(rest) * self.price_per_day
    }

    /// First listed image, used as the card thumbnail.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Car fields supplied by an administrator; the backend assigns the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub color: String,
    pub price_per_day: f64,
    pub price_per_week: f64,
    pub price_per_month: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub category: CarCategory,
    pub seats: u8,
    pub doors: u8,
    pub available_from: String,
    pub available_to: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub rating: f64,
    pub location: String,
    #[serde(default)]
    pub description: String,
}

impl NewCar {
    /// Attach a backend-assigned id.
    #[must_use]
    pub fn with_id(self, id: String) -> Car {
        Car {
            id,
            brand: self.brand,
            model: self.model,
            year: self.year,
            color: self.color,
            price_per_day: self.price_per_day,
            price_per_week: self.price_per_week,
            price_per_month: self.price_per_month,
            original_price: self.original_price,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            category: self.category,
            seats: self.seats,
            doors: self.doors,
            available_from: self.available_from,
            available_to: self.available_to,
            features: self.features,
            images: self.images,
            rating: self.rating,
            location: self.location,
            description: self.description,
        }
    }
}

// =============================================================================
// BOOKING
// =============================================================================

/// Declared booking states. No transition rules are attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Confirmed, Self::Cancelled, Self::Completed];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Paid, Self::Refunded];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Refunded => "Refunded",
        }
    }
}

/// A reservation of one car by one user over a date range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub car_id: String,
    pub user_id: String,
    /// ISO-8601 pickup date.
    pub start_date: String,
    /// ISO-8601 return date.
    pub end_date: String,
    pub total_price: f64,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

/// Booking request body from the car detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub car_id: String,
    pub start_date: String,
    pub end_date: String,
}

/// Administrative status change. Absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
}

// =============================================================================
// USER
// =============================================================================

/// Customer profile document, keyed by the identity provider's uid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub driving_license: String,
    /// Booking ids made by this user. Denormalized; `bookings` is the source of truth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookings: Option<Vec<String>>,
}

/// Editable profile fields. Absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driving_license: Option<String>,
}

impl ProfileUpdate {
    /// Apply the present fields to `user`.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        if let Some(license) = self.driving_license {
            user.driving_license = license;
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Signed-in identity as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Identity provider uid; also the `users` document id.
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub driving_license: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
