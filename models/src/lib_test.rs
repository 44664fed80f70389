use super::*;

fn sample_car() -> Car {
    Car {
        id: "car-1".to_owned(),
        brand: "Toyota".to_owned(),
        model: "Corolla".to_owned(),
        year: 2022,
        color: "White".to_owned(),
        price_per_day: 40.0,
        price_per_week: 250.0,
        price_per_month: 900.0,
        original_price: Some(50.0),
        fuel_type: FuelType::Hybrid,
        transmission: Transmission::Automatic,
        category: CarCategory::Compact,
        seats: 5,
        doors: 4,
        available_from: "2024-01-01T00:00:00Z".to_owned(),
        available_to: "2024-12-31T00:00:00Z".to_owned(),
        features: vec!["Bluetooth".to_owned(), "Cruise control".to_owned()],
        images: vec!["https://images.unsplash.com/photo-1".to_owned()],
        rating: 4.5,
        location: "Lisbon".to_owned(),
        description: "Reliable city car.".to_owned(),
    }
}

#[test]
fn car_serializes_camel_case_fields() {
    let json = serde_json::to_value(sample_car()).unwrap();
    assert_eq!(json["pricePerDay"], 40.0);
    assert_eq!(json["fuelType"], "hybrid");
    assert_eq!(json["transmission"], "automatic");
    assert_eq!(json["category"], "compact");
    assert_eq!(json["availableFrom"], "2024-01-01T00:00:00Z");
    assert!(json.get("price_per_day").is_none());
}

#[test]
fn car_without_original_price_omits_field() {
    let mut car = sample_car();
    car.original_price = None;
    let json = serde_json::to_value(&car).unwrap();
    assert!(json.get("originalPrice").is_none());
}

#[test]
fn car_deserializes_with_missing_optional_lists() {
    let json = serde_json::json!({
        "id": "c9",
        "brand": "Ford",
        "model": "Transit",
        "year": 2020,
        "color": "Grey",
        "pricePerDay": 80.0,
        "pricePerWeek": 500.0,
        "pricePerMonth": 1800.0,
        "fuelType": "diesel",
        "transmission": "manual",
        "category": "van",
        "seats": 9,
        "doors": 4,
        "availableFrom": "2024-03-01T00:00:00Z",
        "availableTo": "2024-02-01T00:00:00Z",
        "rating": 7.5,
        "location": "Porto"
    });
    let car: Car = serde_json::from_value(json).unwrap();
    assert!(car.features.is_empty());
    assert!(car.images.is_empty());
    assert!(car.original_price.is_none());
    assert_eq!(car.category, CarCategory::Van);
    // Window and rating are carried unchecked.
    assert!((car.rating - 7.5).abs() < f64::EPSILON);
    assert_eq!(car.available_to, "2024-02-01T00:00:00Z");
}

#[test]
fn unknown_category_is_rejected() {
    let err = serde_json::from_str::<CarCategory>("\"limousine\"").unwrap_err();
    assert!(err.to_string().contains("unknown variant"));
}

#[test]
fn discount_percent_rounds_saving() {
    assert_eq!(sample_car().discount_percent(), Some(20));
    let mut car = sample_car();
    car.original_price = Some(45.0);
    assert_eq!(car.discount_percent(), Some(11));
}

#[test]
fn discount_percent_none_without_higher_original() {
    let mut car = sample_car();
    car.original_price = None;
    assert_eq!(car.discount_percent(), None);
    car.original_price = Some(40.0);
    assert_eq!(car.discount_percent(), None);
    car.original_price = Some(30.0);
    assert_eq!(car.discount_percent(), None);
}

#[test]
fn rental_total_uses_daily_rate_under_a_week() {
    assert!((sample_car().rental_total(3) - 120.0).abs() < f64::EPSILON);
    assert!(sample_car().rental_total(0).abs() < f64::EPSILON);
}

#[test]
fn rental_total_combines_tiers() {
    let car = sample_car();
    // 1 week + 2 days
    assert!((car.rental_total(9) - 330.0).abs() < f64::EPSILON);
    // 1 month + 2 weeks + 1 day
    assert!((car.rental_total(45) - (900.0 + 500.0 + 40.0)).abs() < f64::EPSILON);
    // exactly one month
    assert!((car.rental_total(30) - 900.0).abs() < f64::EPSILON);
}

#[test]
fn display_name_joins_brand_and_model() {
    assert_eq!(sample_car().display_name(), "Toyota Corolla");
}

#[test]
fn cover_image_is_first_image() {
    let mut car = sample_car();
    assert_eq!(car.cover_image(), Some("https://images.unsplash.com/photo-1"));
    car.images.clear();
    assert_eq!(car.cover_image(), None);
}

#[test]
fn new_car_with_id_keeps_fields() {
    let car = sample_car();
    let json = serde_json::to_value(&car).unwrap();
    let new_car: NewCar = serde_json::from_value(json).unwrap();
    let restored = new_car.with_id("car-1".to_owned());
    assert_eq!(restored, car);
}

#[test]
fn booking_status_defaults_to_pending() {
    let json = serde_json::json!({
        "id": "b1",
        "carId": "car-1",
        "userId": "u1",
        "startDate": "2024-05-01",
        "endDate": "2024-05-04",
        "totalPrice": 120.0
    });
    let booking: Booking = serde_json::from_value(json).unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.payment_status, PaymentStatus::Pending);
    assert!(booking.created_at.is_empty());
}

#[test]
fn booking_status_values_are_lowercase() {
    let values: Vec<String> = BookingStatus::ALL
        .iter()
        .map(|s| serde_json::to_value(s).unwrap().as_str().unwrap().to_owned())
        .collect();
    assert_eq!(values, ["pending", "confirmed", "cancelled", "completed"]);
    let payment: PaymentStatus = serde_json::from_str("\"refunded\"").unwrap();
    assert_eq!(payment, PaymentStatus::Refunded);
}

#[test]
fn status_update_skips_absent_fields() {
    let update = BookingStatusUpdate { status: Some(BookingStatus::Confirmed), payment_status: None };
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "confirmed" }));
}

#[test]
fn user_bookings_back_reference_is_optional() {
    let json = serde_json::json!({ "id": "u1", "name": "Ana", "email": "ana@example.com" });
    let user: User = serde_json::from_value(json).unwrap();
    assert!(user.bookings.is_none());
    assert!(user.phone.is_empty());
    let out = serde_json::to_value(&user).unwrap();
    assert!(out.get("bookings").is_none());
}

#[test]
fn profile_update_applies_present_fields_only() {
    let mut user = User {
        id: "u1".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: "111".to_owned(),
        driving_license: "DL-1".to_owned(),
        bookings: Some(vec!["b1".to_owned()]),
    };
    ProfileUpdate { name: None, phone: Some("222".to_owned()), driving_license: None }.apply(&mut user);
    assert_eq!(user.name, "Ana");
    assert_eq!(user.phone, "222");
    assert_eq!(user.driving_license, "DL-1");
    assert_eq!(user.bookings.as_deref(), Some(&["b1".to_owned()][..]));
}

#[test]
fn session_user_admin_flag_defaults_false() {
    let json = serde_json::json!({ "id": "u1", "email": "a@b.c", "name": "A" });
    let user: SessionUser = serde_json::from_value(json).unwrap();
    assert!(!user.is_admin);
}

#[test]
fn category_labels_cover_all_variants() {
    let labels: Vec<&str> = CarCategory::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(labels, ["Economy", "Compact", "Midsize", "SUV", "Luxury", "Van"]);
}
