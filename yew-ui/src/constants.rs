/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Runtime configuration read from `window.__APP_CONFIG`.
//!
//! The host page injects the object before the wasm bundle loads. A missing
//! or malformed config only disables the assistant; the call view works
//! without it.

use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use huddle_assistant::{AuthMode, TextGenerationClient, INSIGHT_INTERVAL};
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;

/// User id of the local participant in every room.
pub const LOCAL_USER_ID: &str = "current-user";

/// Display name used when the join form was skipped.
pub const DEFAULT_DISPLAY_NAME: &str = "You";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "assistantBaseUrl")]
    pub assistant_base_url: String,
    /// Sent as a bearer token when present; otherwise browser cookies are
    /// used.
    #[serde(rename = "assistantToken")]
    #[serde(default)]
    pub assistant_token: Option<String>,
    #[serde(rename = "insightIntervalSecs")]
    #[serde(default)]
    pub insight_interval_secs: Option<u64>,
    #[serde(rename = "simulateParticipants")]
    #[serde(default = "default_true")]
    pub simulate_participants: bool,
}

fn default_true() -> bool {
    true
}

pub fn app_config() -> anyhow::Result<RuntimeConfig> {
    let config = js_sys::Reflect::get(&gloo_utils::window(), &JsValue::from_str("__APP_CONFIG"))
        .map_err(|e| anyhow!("Failed to read window.__APP_CONFIG: {e:?}"))?;
    if config.is_undefined() || config.is_null() {
        bail!("Runtime configuration not found (window.__APP_CONFIG missing)");
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| anyhow!("{e}"))
        .context("Failed to parse __APP_CONFIG")
}

pub fn assistant_client() -> anyhow::Result<TextGenerationClient> {
    let config = app_config()?;
    if config.assistant_base_url.trim().is_empty() {
        bail!("assistantBaseUrl is empty");
    }
    let auth = match config.assistant_token.filter(|t| !t.is_empty()) {
        Some(token) => AuthMode::Bearer(token),
        None => AuthMode::Cookie,
    };
    Ok(TextGenerationClient::new(&config.assistant_base_url, auth))
}

pub fn insight_interval() -> Duration {
    app_config()
        .ok()
        .and_then(|c| c.insight_interval_secs)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(INSIGHT_INTERVAL)
}

pub fn simulate_participants() -> bool {
    app_config()
        .map(|c| c.simulate_participants)
        .unwrap_or(true)
}
