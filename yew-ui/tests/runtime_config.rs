// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Tests for reading `window.__APP_CONFIG`.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use wasm_bindgen_test::*;

use huddle_assistant::INSIGHT_INTERVAL;
use huddle_ui::constants::{
    app_config, assistant_client, insight_interval, simulate_participants,
};
use support::{inject_app_config, remove_app_config};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn injected_config_is_parsed() {
    inject_app_config();

    let config = app_config().unwrap();
    assert_eq!(config.assistant_base_url, "http://test:8080/");
    assert_eq!(config.assistant_token.as_deref(), Some("test-token"));
    assert_eq!(insight_interval(), Duration::from_secs(30));
    assert!(!simulate_participants());

    let client = assistant_client().unwrap();
    assert_eq!(client.base_url(), "http://test:8080");

    remove_app_config();
}

#[wasm_bindgen_test]
fn missing_config_falls_back_to_defaults() {
    remove_app_config();

    let err = app_config().unwrap_err();
    assert!(err.to_string().contains("__APP_CONFIG"));
    assert!(assistant_client().is_err());
    assert_eq!(insight_interval(), INSIGHT_INTERVAL);
    assert!(simulate_participants());
}
