//! Form drafts for the booking and fleet-admin screens.
//!
//! Inputs are kept as raw strings while editing and converted to request
//! payloads on submit, so a half-typed number never clobbers the field.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use models::{BookingStatus, CarCategory, FuelType, NewBooking, NewCar, PaymentStatus, Transmission};

/// Booking date-range draft (`YYYY-MM-DD` inputs).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub start_date: String,
    pub end_date: String,
}

impl BookingDraft {
    /// Build the request body.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when a date is missing or the range is empty.
    pub fn to_request(&self, car_id: &str) -> Result<NewBooking, String> {
        let start = self.start_date.trim();
        let end = self.end_date.trim();
        if start.is_empty() || end.is_empty() {
            return Err("Pick both a pickup and a return date.".to_owned());
        }
        // ISO dates order lexicographically.
        if end <= start {
            return Err("Return date must be after pickup date.".to_owned());
        }
        Ok(NewBooking { car_id: car_id.to_owned(), start_date: start.to_owned(), end_date: end.to_owned() })
    }
}

/// Fleet-admin "add car" draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarDraft {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub color: String,
    pub price_per_day: String,
    pub price_per_week: String,
    pub price_per_month: String,
    pub original_price: String,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub category: CarCategory,
    pub seats: String,
    pub doors: String,
    pub available_from: String,
    pub available_to: String,
    /// Comma-separated feature list.
    pub features: String,
    /// One image URL per line.
    pub images: String,
    pub location: String,
    pub description: String,
}

impl Default for CarDraft {
    fn default() -> Self {
        Self {
            brand: String::new(),
            model: String::new(),
            year: String::new(),
            color: String::new(),
            price_per_day: String::new(),
            price_per_week: String::new(),
            price_per_month: String::new(),
            original_price: String::new(),
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            category: CarCategory::Economy,
            seats: "5".to_owned(),
            doors: "4".to_owned(),
            available_from: String::new(),
            available_to: String::new(),
            features: String::new(),
            images: String::new(),
            location: String::new(),
            description: String::new(),
        }
    }
}

/// Rating assigned to a newly listed car until reviews come in.
pub const NEW_CAR_RATING: f64 = 5.0;

impl CarDraft {
    /// Parse the draft into a creation payload.
    ///
    /// # Errors
    ///
    /// Returns the first field that is missing or not a number.
    pub fn to_new_car(&self) -> Result<NewCar, String> {
        let brand = required("Brand", &self.brand)?;
        let model = required("Model", &self.model)?;
        let location = required("Location", &self.location)?;
        let original_price = match self.original_price.trim() {
            "" => None,
            raw => Some(parse_number::<f64>("Original price", raw)?),
        };
        Ok(NewCar {
            brand,
            model,
            year: parse_number("Year", &self.year)?,
            color: self.color.trim().to_owned(),
            price_per_day: parse_number("Price per day", &self.price_per_day)?,
            price_per_week: parse_number("Price per week", &self.price_per_week)?,
            price_per_month: parse_number("Price per month", &self.price_per_month)?,
            original_price,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            category: self.category,
            seats: parse_number("Seats", &self.seats)?,
            doors: parse_number("Doors", &self.doors)?,
            available_from: self.available_from.trim().to_owned(),
            available_to: self.available_to.trim().to_owned(),
            features: split_list(&self.features, ','),
            images: split_list(&self.images, '\n'),
            rating: NEW_CAR_RATING,
            location,
            description: self.description.trim().to_owned(),
        })
    }
}

fn required(label: &str, raw: &str) -> Result<String, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(format!("{label} is required."));
    }
    Ok(value.to_owned())
}

fn parse_number<T: std::str::FromStr>(label: &str, raw: &str) -> Result<T, String> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| format!("{label} must be a number."))
}

fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse a `<select>` value back into a category.
#[must_use]
pub fn category_from_value(value: &str) -> Option<CarCategory> {
    CarCategory::ALL.into_iter().find(|c| category_value(*c) == value)
}

/// `<option>` value for a category (its serialized name).
#[must_use]
pub fn category_value(category: CarCategory) -> &'static str {
    match category {
        CarCategory::Economy => "economy",
        CarCategory::Compact => "compact",
        CarCategory::Midsize => "midsize",
        CarCategory::Suv => "suv",
        CarCategory::Luxury => "luxury",
        CarCategory::Van => "van",
    }
}

/// `<option>` value for a booking status.
#[must_use]
pub fn booking_status_value(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "pending",
        BookingStatus::Confirmed => "confirmed",
        BookingStatus::Cancelled => "cancelled",
        BookingStatus::Completed => "completed",
    }
}

#[must_use]
pub fn booking_status_from_value(value: &str) -> Option<BookingStatus> {
    BookingStatus::ALL.into_iter().find(|s| booking_status_value(*s) == value)
}

/// `<option>` value for a payment status.
#[must_use]
pub fn payment_status_value(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "pending",
        PaymentStatus::Paid => "paid",
        PaymentStatus::Refunded => "refunded",
    }
}

#[must_use]
pub fn payment_status_from_value(value: &str) -> Option<PaymentStatus> {
    PaymentStatus::ALL.into_iter().find(|s| payment_status_value(*s) == value)
}
