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

//! Application route definitions.
//!
//! Extracted into its own module so that both the app root and integration
//! tests can share the same `Route` enum.

use enum_display::EnumDisplay;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug, EnumDisplay)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/join")]
    Join,
    #[at("/settings")]
    Settings,
    #[at("/call/:id")]
    Call { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// A fresh room id for an instant meeting.
pub fn instant_room_id(now_ms: f64) -> String {
    format!("room_{}", now_ms as u64)
}
