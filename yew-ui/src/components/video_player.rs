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

//! One participant tile: a `<video>` element bound to the participant's
//! stream, or an avatar initial while video is off.

use huddle_client::web::{VideoElementSurface, WebTrack};
use huddle_client::{BindOutcome, Participant, SurfaceBinding};
use log::{debug, error};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub participant: Participant<WebTrack>,
    /// Overrides the participant's name in the overlay.
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// Self-preview: audio is muted on the element.
    #[prop_or_default]
    pub is_local: bool,
    /// Rendered as the large main tile.
    #[prop_or_default]
    pub main: bool,
}

#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    let video_ref = use_node_ref();
    let binding = use_mut_ref(|| None::<SurfaceBinding<VideoElementSurface>>);
    let participant = &props.participant;
    let label = props
        .label
        .clone()
        .unwrap_or_else(|| AttrValue::from(participant.name.clone()));

    {
        let video_ref = video_ref.clone();
        let binding = binding.clone();
        let label = label.clone();
        let muted = props.is_local;
        use_effect_with(
            (participant.stream.clone(), participant.video_enabled),
            move |(stream, video_enabled)| {
                let current = {
                    let mut slot = binding.borrow_mut();
                    if slot.is_none() {
                        if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                            *slot = Some(SurfaceBinding::new(
                                VideoElementSurface::new(video),
                                &label,
                                muted,
                            ));
                        }
                    }
                    slot.clone()
                };

                match current {
                    Some(current) => {
                        let stream = stream.clone();
                        let video_enabled = *video_enabled;
                        wasm_bindgen_futures::spawn_local(async move {
                            match current.bind(stream.as_ref(), video_enabled).await {
                                Ok(BindOutcome::Stale) => {
                                    debug!("Dropped superseded attach for {label}")
                                }
                                Ok(outcome) => debug!("Bound {label}: {outcome:?}"),
                                Err(e) => error!("Failed to render {label}: {e}"),
                            }
                        });
                    }
                    None => error!("Video element for {label} is not mounted"),
                }
                || ()
            },
        );
    }

    {
        let binding = binding.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(binding) = binding.borrow().as_ref() {
                    binding.unbind();
                }
            }
        });
    }

    let show_video = participant.stream.is_some() && participant.video_enabled;

    html! {
        <div class={classes!(
            "video-tile",
            props.main.then_some("main"),
            props.is_local.then_some("local"),
            participant.hand_raised.then_some("hand-raised"),
        )}>
            <video
                ref={video_ref}
                class={classes!("video-element", (!show_video).then_some("hidden"))}
                autoplay=true
                playsinline=true
            />
            if !show_video {
                <div class="video-avatar">
                    <span class="avatar-initial">{ participant.initial() }</span>
                </div>
            }
            <div class="video-overlay">
                <span class="participant-name">{ label }</span>
                if participant.muted {
                    <span class="status-icon muted" title="Muted">{"🔇"}</span>
                }
                if participant.hand_raised {
                    <span class="status-icon hand" title="Hand raised">{"✋"}</span>
                }
            </div>
        </div>
    }
}
