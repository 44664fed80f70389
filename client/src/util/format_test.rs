use super::*;

#[test]
fn price_drops_zero_cents() {
    assert_eq!(price(40.0), "$40");
    assert_eq!(price(0.0), "$0");
}

#[test]
fn price_keeps_cents() {
    assert_eq!(price(39.5), "$39.50");
    assert_eq!(price(12.346), "$12.35");
}

#[test]
fn price_groups_thousands() {
    assert_eq!(price(1800.0), "$1,800");
    assert_eq!(price(1_234_567.89), "$1,234,567.89");
    assert_eq!(price(1000.05), "$1,000.05");
}

#[test]
fn price_negative_amounts() {
    assert_eq!(price(-25.0), "-$25");
}

#[test]
fn stars_round_and_clamp() {
    assert_eq!(stars(4.4), "★★★★☆");
    assert_eq!(stars(4.5), "★★★★★");
    assert_eq!(stars(9.0), "★★★★★");
    assert_eq!(stars(-1.0), "☆☆☆☆☆");
}

#[test]
fn date_only_strips_time() {
    assert_eq!(date_only("2024-05-01T10:00:00Z"), "2024-05-01");
    assert_eq!(date_only("2024-05-01"), "2024-05-01");
}
