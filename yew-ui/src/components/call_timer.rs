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

//! Self-contained timer component for displaying elapsed call duration.

use gloo_timers::callback::Interval;
use huddle_client::utils::format_elapsed;
use yew::prelude::*;

/// Placeholder shown when no start time is available.
const NO_TIME_PLACEHOLDER: &str = "--:--";

#[derive(Properties, PartialEq, Clone)]
pub struct CallTimerProps {
    /// Unix timestamp in milliseconds when the call started.
    /// If `None`, displays "--:--".
    #[prop_or_default]
    pub start_time_ms: Option<f64>,
}

/// Updates once a second without re-rendering the parent.
///
/// Renders inline text only (no wrapper element).
#[function_component(CallTimer)]
pub fn call_timer(props: &CallTimerProps) -> Html {
    let duration = use_state(|| NO_TIME_PLACEHOLDER.to_string());
    let start_time = props.start_time_ms;

    {
        let duration = duration.clone();
        use_effect_with(start_time, move |start_time| {
            let start_time = *start_time;

            match start_time {
                Some(start_ms) => duration.set(elapsed_label(start_ms, js_sys::Date::now())),
                None => duration.set(NO_TIME_PLACEHOLDER.to_string()),
            }

            let interval = start_time.map(|start_ms| {
                let duration = duration.clone();
                Interval::new(1000, move || {
                    duration.set(elapsed_label(start_ms, js_sys::Date::now()));
                })
            });

            move || drop(interval)
        });
    }

    html! { { (*duration).clone() } }
}

/// `m:ss` (or `h:mm:ss`) between `start_ms` and `now_ms`.
pub fn elapsed_label(start_ms: f64, now_ms: f64) -> String {
    let elapsed_secs = ((now_ms - start_ms).max(0.0) / 1000.0) as u64;
    format_elapsed(elapsed_secs)
}
