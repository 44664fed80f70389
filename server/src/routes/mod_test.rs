use super::*;
use crate::config::AppConfig;
use crate::state::test_helpers::{test_app_state, test_config};

#[test]
fn no_configured_origin_means_no_cors_layer() {
    assert!(cors_layer(None).is_none());
}

#[test]
fn configured_origin_builds_a_credentialed_layer() {
    assert!(cors_layer(Some("https://app.example.com")).is_some());
}

#[test]
fn unparsable_origin_is_ignored() {
    assert!(cors_layer(Some("https://bad\norigin")).is_none());
}

#[test]
fn api_routes_build_with_and_without_an_origin() {
    let _ = api_routes(test_app_state());

    let config = AppConfig { cors_origin: Some("https://app.example.com".to_owned()), ..test_config() };
    let state = AppState::from_config(config).expect("memory state should build");
    let _ = api_routes(state);
}
