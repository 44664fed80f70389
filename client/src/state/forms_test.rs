use super::*;

fn filled_car_draft() -> CarDraft {
    CarDraft {
        brand: " Tesla ".to_owned(),
        model: "Model 3".to_owned(),
        year: "2023".to_owned(),
        color: "Red".to_owned(),
        price_per_day: "90".to_owned(),
        price_per_week: "560".to_owned(),
        price_per_month: "2000.5".to_owned(),
        original_price: String::new(),
        fuel_type: FuelType::Electric,
        category: CarCategory::Luxury,
        available_from: "2024-06-01T00:00:00Z".to_owned(),
        available_to: "2024-09-01T00:00:00Z".to_owned(),
        features: "Autopilot, Heated seats,,".to_owned(),
        images: "https://images.unsplash.com/a\n\nhttps://images.pexels.com/b\n".to_owned(),
        location: "Madrid".to_owned(),
        ..CarDraft::default()
    }
}

#[test]
fn booking_draft_requires_both_dates() {
    let draft = BookingDraft { start_date: "2024-05-01".to_owned(), end_date: "  ".to_owned() };
    assert!(draft.to_request("car-1").is_err());
}

#[test]
fn booking_draft_rejects_empty_range() {
    let draft = BookingDraft { start_date: "2024-05-03".to_owned(), end_date: "2024-05-03".to_owned() };
    let err = draft.to_request("car-1").unwrap_err();
    assert!(err.contains("after pickup"));
}

#[test]
fn booking_draft_builds_request() {
    let draft = BookingDraft { start_date: "2024-05-01".to_owned(), end_date: "2024-05-04 ".to_owned() };
    let request = draft.to_request("car-1").unwrap();
    assert_eq!(request.car_id, "car-1");
    assert_eq!(request.end_date, "2024-05-04");
}

#[test]
fn car_draft_parses_all_fields() {
    let car = filled_car_draft().to_new_car().unwrap();
    assert_eq!(car.brand, "Tesla");
    assert_eq!(car.year, 2023);
    assert!((car.price_per_month - 2000.5).abs() < f64::EPSILON);
    assert!(car.original_price.is_none());
    assert_eq!(car.features, ["Autopilot", "Heated seats"]);
    assert_eq!(car.images.len(), 2);
    assert_eq!(car.seats, 5);
    assert_eq!(car.transmission, Transmission::Automatic);
    assert!((car.rating - NEW_CAR_RATING).abs() < f64::EPSILON);
}

#[test]
fn car_draft_reports_missing_brand() {
    let draft = CarDraft { brand: "   ".to_owned(), ..filled_car_draft() };
    assert_eq!(draft.to_new_car().unwrap_err(), "Brand is required.");
}

#[test]
fn car_draft_reports_bad_number() {
    let draft = CarDraft { price_per_day: "ninety".to_owned(), ..filled_car_draft() };
    assert_eq!(draft.to_new_car().unwrap_err(), "Price per day must be a number.");
    let draft = CarDraft { seats: "300".to_owned(), ..filled_car_draft() };
    assert_eq!(draft.to_new_car().unwrap_err(), "Seats must be a number.");
}

#[test]
fn car_draft_parses_original_price() {
    let draft = CarDraft { original_price: "110".to_owned(), ..filled_car_draft() };
    assert_eq!(draft.to_new_car().unwrap().original_price, Some(110.0));
}

#[test]
fn category_value_round_trips_through_select() {
    for category in CarCategory::ALL {
        assert_eq!(category_from_value(category_value(category)), Some(category));
    }
    assert_eq!(category_from_value("limousine"), None);
}

#[test]
fn status_select_values_match_wire_names() {
    for status in BookingStatus::ALL {
        assert_eq!(booking_status_from_value(booking_status_value(status)), Some(status));
    }
    for status in PaymentStatus::ALL {
        assert_eq!(payment_status_from_value(payment_status_value(status)), Some(status));
    }
    assert_eq!(booking_status_from_value("paid"), None);
    assert_eq!(payment_status_from_value("confirmed"), None);
}
