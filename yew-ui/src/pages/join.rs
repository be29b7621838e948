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

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::DisplayNameCtx;
use crate::routing::Route;

/// Pause before navigating, while the button reads "Joining...".
const JOIN_DELAY_MS: u32 = 1_000;

/// Both fields are required; surrounding whitespace does not count.
pub fn can_join(meeting_id: &str, display_name: &str) -> bool {
    !meeting_id.trim().is_empty() && !display_name.trim().is_empty()
}

#[function_component(JoinMeeting)]
pub fn join_meeting() -> Html {
    let navigator = use_navigator();
    let display_name_ctx = use_context::<DisplayNameCtx>();
    let meeting_id = use_state(String::new);
    let remembered_name = display_name_ctx
        .as_ref()
        .and_then(|name| (**name).clone())
        .unwrap_or_default();
    let display_name = use_state(move || remembered_name);
    let joining = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    let input_handler = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let ready = can_join(&meeting_id, &display_name);

    let onsubmit = {
        let meeting_id = meeting_id.clone();
        let display_name = display_name.clone();
        let joining = joining.clone();
        let pending = pending.clone();
        let navigator = navigator.clone();
        let display_name_ctx = display_name_ctx.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *joining || !can_join(&meeting_id, &display_name) {
                return;
            }
            let id = meeting_id.trim().to_string();
            let name = display_name.trim().to_string();
            info!("Joining meeting {id} as {name}");
            if let Some(ctx) = &display_name_ctx {
                ctx.set(Some(name));
            }
            joining.set(true);

            let navigator = navigator.clone();
            let joining = joining.clone();
            *pending.borrow_mut() = Some(Timeout::new(JOIN_DELAY_MS, move || {
                joining.set(false);
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Call { id });
                }
            }));
        })
    };

    let back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Dashboard);
            }
        })
    };

    html! {
        <div class="join-page">
            <form class="join-form" {onsubmit}>
                <h1>{"Join a Meeting"}</h1>
                <label for="meeting-id">{"Meeting ID"}</label>
                <input
                    id="meeting-id"
                    type="text"
                    placeholder="Enter meeting ID"
                    value={(*meeting_id).clone()}
                    oninput={input_handler(meeting_id.clone())}
                    disabled={*joining}
                />
                <label for="display-name">{"Display Name"}</label>
                <input
                    id="display-name"
                    type="text"
                    placeholder="Enter your name"
                    value={(*display_name).clone()}
                    oninput={input_handler(display_name.clone())}
                    disabled={*joining}
                />
                <button id="join-submit" type="submit" class="btn-primary" disabled={!ready || *joining}>
                    { if *joining { "Joining..." } else { "Join Meeting" } }
                </button>
                <button type="button" class="btn-secondary" onclick={back}>
                    {"Back to Dashboard"}
                </button>
            </form>
        </div>
    }
}
