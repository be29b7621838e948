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

//! Context providers for the application
//!
//! This module centralises shared state that needs to be accessed across
//! the component tree through Yew's `ContextProvider`.

use yew::prelude::*;

use crate::constants::DEFAULT_DISPLAY_NAME;
use crate::settings::UserSettings;

/// Name entered on the join page, if any.
///
/// `UseStateHandle<Option<String>>` allows both read-only access (via
/// deref) and mutation by calling `.set(Some("new_name".into()))`.
pub type DisplayNameCtx = UseStateHandle<Option<String>>;

/// In-memory user preferences.
pub type SettingsCtx = UseStateHandle<UserSettings>;

/// The name the local participant is shown with.
pub fn effective_display_name(ctx: Option<&DisplayNameCtx>) -> String {
    ctx.and_then(|name| (**name).clone())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string())
}
