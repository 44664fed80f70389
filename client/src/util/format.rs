//! Display formatting for prices, ratings and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `"$1,234.50"` style price. Whole amounts drop the cents.
#[must_use]
pub fn price(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    #[allow(clippy::cast_possible_truncation)]
    let cents = cents as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("{sign}${whole}"),
        frac => format!("{sign}${whole}.{frac:02}"),
    }
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if value < 1000 {
            groups.push(value.to_string());
            break;
        }
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

/// Five-slot star string for a rating, rounded to the nearest whole star and
/// clamped to `0..=5`.
#[must_use]
pub fn stars(rating: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Date part of an ISO-8601 timestamp (`"2024-05-01T10:00:00Z"` -> `"2024-05-01"`).
#[must_use]
pub fn date_only(iso: &str) -> &str {
    iso.split_once('T').map_or(iso, |(date, _)| date)
}
