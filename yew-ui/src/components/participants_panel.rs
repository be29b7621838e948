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

use huddle_client::web::WebTrack;
use huddle_client::Participant;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ParticipantsPanelProps {
    pub participants: Vec<Participant<WebTrack>>,
    pub local_id: AttrValue,
}

#[function_component(ParticipantsPanel)]
pub fn participants_panel(props: &ParticipantsPanelProps) -> Html {
    html! {
        <div class="participants-panel">
            <h3>{ format!("Participants ({})", props.participants.len()) }</h3>
            <ul class="participant-list">
                { for props.participants.iter().map(|p| {
                    let is_local = p.id == props.local_id.as_str();
                    html! {
                        <li key={p.id.clone()} class="participant-row">
                            <span class="avatar-initial small">{ p.initial() }</span>
                            <span class="participant-name">
                                { p.name.clone() }
                                if is_local { <span class="you-tag">{" (You)"}</span> }
                            </span>
                            <span class="participant-status">
                                if p.hand_raised { <span title="Hand raised">{"✋"}</span> }
                                <span title={if p.muted { "Muted" } else { "Unmuted" }}>
                                    { if p.muted { "🔇" } else { "🎤" } }
                                </span>
                                <span title={if p.video_enabled { "Camera on" } else { "Camera off" }}>
                                    { if p.video_enabled { "📹" } else { "🚫" } }
                                </span>
                            </span>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}
