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

//! The in-call view for `/call/:id`.
//!
//! One [`CallRoom`] lives for as long as the page is mounted. Local media is
//! requested on mount and released on unmount; the simulated participants,
//! analytics refresh and assistant insights run on gloo timers owned by the
//! mount effect.

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use huddle_assistant::{
    Assistant, AssistantError, InsightRequest, MeetingContext, TextGenerationClient, APOLOGY,
    FIRST_INSIGHT_DELAY,
};
use huddle_client::analytics::ANALYTICS_INTERVAL;
use huddle_client::web::{WebMediaPlatform, WebTrack};
use huddle_client::{
    CallRoom, LocalIdentity, Participant, RemoteParticipantSource, SimulatedParticipants,
};
use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::assistant_panel::AssistantPanel;
use crate::components::call_timer::CallTimer;
use crate::components::chat_panel::ChatPanel;
use crate::components::error_alert::ErrorAlert;
use crate::components::participants_panel::ParticipantsPanel;
use crate::components::video_control_buttons::{
    AssistantButton, CameraButton, ChatButton, HandRaiseButton, HangUpButton, MicButton,
    ScreenShareButton,
};
use crate::components::video_player::VideoPlayer;
use crate::constants::{assistant_client, insight_interval, simulate_participants, LOCAL_USER_ID};
use crate::context::{effective_display_name, DisplayNameCtx, SettingsCtx};
use crate::routing::Route;
use crate::settings::UserSettings;

type Room = CallRoom<WebMediaPlatform>;
type SharedAssistant = Rc<Result<Assistant<TextGenerationClient>, String>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SidebarTab {
    Assistant,
    Chat,
    People,
}

impl SidebarTab {
    const ALL: [SidebarTab; 3] = [SidebarTab::Assistant, SidebarTab::Chat, SidebarTab::People];

    fn label(&self) -> &'static str {
        match self {
            SidebarTab::Assistant => "AI",
            SidebarTab::Chat => "Chat",
            SidebarTab::People => "People",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CallPageProps {
    pub id: String,
}

/// Joins the room and applies the "join muted" and "join with video"
/// preferences once media is live.
async fn join_with_preferences(room: &Room, settings: &UserSettings) {
    if let Err(e) = room.join().await {
        warn!("Join failed: {e}");
        return;
    }
    if settings.audio.auto_join_muted && !room.session().is_muted() {
        if let Err(e) = room.toggle_mute() {
            warn!("Could not join muted: {e}");
        }
    }
    if !settings.video.auto_join_video && room.session().is_video_enabled() {
        if let Err(e) = room.toggle_video() {
            warn!("Could not join with video off: {e}");
        }
    }
}

fn request_insight(
    assistant: &SharedAssistant,
    request: InsightRequest,
    update: &UseForceUpdateHandle,
) {
    let assistant = assistant.clone();
    let update = update.clone();
    spawn_local(async move {
        if let Ok(assistant) = assistant.as_ref() {
            if assistant.generate_insight(&request).await.is_ok() {
                update.force_update();
            }
        }
    });
}

/// The assistant to request insights from: `None` when the user turned the
/// assistant off or it is not configured.
fn insight_source(settings: &UserSettings, assistant: &SharedAssistant) -> Option<SharedAssistant> {
    (settings.assistant.enable_assistant && assistant.is_ok()).then(|| assistant.clone())
}

fn meeting_context(room: &Room) -> MeetingContext {
    let analytics = room.analytics();
    MeetingContext::new(
        room.roster().len(),
        analytics.duration_minutes(),
        analytics.engagement_score,
    )
}

#[function_component(CallPage)]
pub fn call_page(props: &CallPageProps) -> Html {
    let navigator = use_navigator();
    let display_name = effective_display_name(use_context::<DisplayNameCtx>().as_ref());
    let settings = use_context::<SettingsCtx>()
        .map(|ctx| (*ctx).clone())
        .unwrap_or_default();
    let room = use_memo(props.id.clone(), move |id| {
        Room::new(
            WebMediaPlatform,
            LocalIdentity::new(id.clone(), LOCAL_USER_ID, display_name),
        )
    });
    let assistant: SharedAssistant = use_memo((), |_| {
        assistant_client()
            .map(Assistant::new)
            .map_err(|e| format!("AI assistant unavailable: {e:#}"))
    });
    let update = use_force_update();
    let started_at = use_state(js_sys::Date::now);
    let sidebar = use_state(|| Some(SidebarTab::Assistant));
    let asking = use_state(|| false);
    let timers = use_mut_ref(Vec::<Timeout>::new);

    {
        let room = room.clone();
        let assistant = assistant.clone();
        let update = update.clone();
        let timers = timers.clone();
        let settings = settings.clone();
        use_effect_with(props.id.clone(), move |_| {
            {
                let update = update.clone();
                room.set_on_change(move || update.force_update());
            }

            {
                let room = room.clone();
                let timers = timers.clone();
                let settings = settings.clone();
                spawn_local(async move {
                    join_with_preferences(&room, &settings).await;
                    if room.session().is_initialized() && simulate_participants() {
                        let simulated = SimulatedParticipants;
                        let delay = simulated.join_delay().as_millis() as u32;
                        let room = room.clone();
                        timers.borrow_mut().push(Timeout::new(delay, move || {
                            let added = room.admit_remote(&simulated);
                            debug!("{added} simulated participants joined");
                        }));
                    }
                });
            }

            if let (true, Err(e)) = (settings.assistant.enable_assistant, assistant.as_ref()) {
                info!("{e}");
            }
            let source = insight_source(&settings, &assistant);

            let analytics = {
                let room = room.clone();
                let source = source.clone();
                let update = update.clone();
                Interval::new(ANALYTICS_INTERVAL.as_millis() as u32, move || {
                    let grew = room.tick_analytics();
                    if let (true, Some(assistant)) = (grew, &source) {
                        let request = InsightRequest::participant_joined(room.roster().len());
                        request_insight(assistant, request, &update);
                    }
                })
            };

            let insights = source.map(|assistant| {
                let opening = {
                    let room = room.clone();
                    let assistant = assistant.clone();
                    let update = update.clone();
                    Timeout::new(FIRST_INSIGHT_DELAY.as_millis() as u32, move || {
                        let count = room.roster().len();
                        request_insight(&assistant, InsightRequest::opening(count), &update);
                    })
                };
                let periodic = {
                    let room = room.clone();
                    let update = update.clone();
                    Interval::new(insight_interval().as_millis() as u32, move || {
                        let analytics = room.analytics();
                        let request = InsightRequest::random_periodic(
                            room.roster().len(),
                            analytics.engagement_score,
                            analytics.duration_minutes(),
                        );
                        request_insight(&assistant, request, &update);
                    })
                };
                (opening, periodic)
            });

            move || {
                drop(analytics);
                drop(insights);
                timers.borrow_mut().clear();
                room.set_on_change(|| ());
                room.end();
            }
        });
    }

    let snapshot = room.session().snapshot();
    let participants: Vec<Participant<WebTrack>> = room.participants();
    let local = room
        .roster()
        .local()
        .cloned()
        .unwrap_or_else(|| Participant {
            stream: snapshot.current.clone(),
            muted: snapshot.muted,
            video_enabled: snapshot.video_enabled,
            ..Participant::new(LOCAL_USER_ID, room.identity().display_name.clone())
        });
    let remotes: Vec<Participant<WebTrack>> = room.roster().others().cloned().collect();
    let has_stream = snapshot.current.is_some();

    let on_mic = {
        let room = room.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = room.toggle_mute() {
                warn!("Toggle microphone failed: {e}");
            }
        })
    };
    let on_camera = {
        let room = room.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = room.toggle_video() {
                warn!("Toggle camera failed: {e}");
            }
        })
    };
    let on_share = {
        let room = room.clone();
        Callback::from(move |_: MouseEvent| {
            let room = room.clone();
            spawn_local(async move {
                if let Err(e) = room.toggle_screen_share().await {
                    debug!("Screen share toggle ended with: {e}");
                }
            });
        })
    };
    let on_hand = {
        let room = room.clone();
        let raised = local.hand_raised;
        Callback::from(move |_: MouseEvent| room.set_hand_raised(!raised))
    };
    let toggle_tab = |tab: SidebarTab| {
        let sidebar = sidebar.clone();
        Callback::from(move |_: MouseEvent| {
            let next = if *sidebar == Some(tab) { None } else { Some(tab) };
            sidebar.set(next);
        })
    };
    let on_hang_up = {
        let room = room.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            room.end();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Dashboard);
            }
        })
    };
    let on_settings = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Settings);
            }
        })
    };
    let on_retry = {
        let room = room.clone();
        let settings = settings.clone();
        Callback::from(move |_: ()| {
            if room.session().is_initialized() {
                room.dismiss_error();
                return;
            }
            let room = room.clone();
            let settings = settings.clone();
            spawn_local(async move { join_with_preferences(&room, &settings).await });
        })
    };
    let on_dismiss = {
        let room = room.clone();
        Callback::from(move |_: ()| room.dismiss_error())
    };
    let on_send = {
        let room = room.clone();
        Callback::from(move |text: String| {
            room.send_chat(&text);
        })
    };
    let on_ask = {
        let room = room.clone();
        let assistant = assistant.clone();
        let asking = asking.clone();
        Callback::from(move |question: String| {
            room.record_question();
            let room = room.clone();
            let assistant = assistant.clone();
            let asking = asking.clone();
            spawn_local(async move {
                let Ok(assistant) = assistant.as_ref() else {
                    room.push_assistant_message(APOLOGY);
                    return;
                };
                let context = meeting_context(&room);
                asking.set(true);
                match assistant.answer(&question, &context).await {
                    Ok(reply) => room.push_assistant_message(&reply),
                    Err(AssistantError::Busy) => debug!("Assistant busy, question dropped"),
                    Err(e) => warn!("Question not sent: {e}"),
                }
                asking.set(false);
            });
        })
    };

    let main_tile = if snapshot.screen_sharing {
        html! { <VideoPlayer participant={local.clone()} label="Screen Share" is_local=true main=true /> }
    } else if let Some(first) = remotes.first() {
        html! { <VideoPlayer key={first.id.clone()} participant={first.clone()} main=true /> }
    } else {
        html! {
            <div class="video-tile main waiting">
                <p>{"Waiting for participants..."}</p>
            </div>
        }
    };
    let extra_remotes = remotes
        .iter()
        .skip(usize::from(!snapshot.screen_sharing))
        .map(|p| html! { <VideoPlayer key={p.id.clone()} participant={p.clone()} /> });

    let sidebar_tabs = SidebarTab::ALL.iter().map(|t| {
        let onclick = {
            let sidebar = sidebar.clone();
            let t = *t;
            Callback::from(move |_: MouseEvent| sidebar.set(Some(t)))
        };
        html! {
            <button class={classes!("tab", (*sidebar == Some(*t)).then_some("active"))} {onclick}>
                { t.label() }
            </button>
        }
    });
    let sidebar_body = match *sidebar {
        Some(SidebarTab::Assistant) => html! {
            <AssistantPanel
                analytics={room.analytics()}
                insights={assistant.as_ref().as_ref().map(|a| a.insights()).unwrap_or_default()}
                thinking={*asking}
                config_error={assistant.as_ref().as_ref().err().cloned()}
                on_ask={on_ask}
            />
        },
        Some(SidebarTab::Chat) => html! {
            <ChatPanel messages={room.chat_messages()} {on_send} />
        },
        Some(SidebarTab::People) => html! {
            <ParticipantsPanel participants={participants.clone()} local_id={LOCAL_USER_ID} />
        },
        None => html! {},
    };

    html! {
        <div class="call-page">
            <header class="call-header">
                <h2>{ format!("Meeting Room: {}", props.id) }</h2>
                <span class="live-badge">{"Live"}</span>
                <span class="call-timer"><CallTimer start_time_ms={Some(*started_at)} /></span>
                <span class="participant-count">{ format!("{} participants", participants.len()) }</span>
                <button class="btn-icon" title="Settings" onclick={on_settings}>{"⚙️"}</button>
            </header>

            if let Some(message) = snapshot.error.clone() {
                <ErrorAlert {message} {on_retry} {on_dismiss} />
            } else if !has_stream {
                <div class="permission-hint">
                    {"Requesting camera and microphone access... Please allow permissions when prompted."}
                </div>
            }

            <div class="call-body">
                <main class="video-grid">
                    <VideoPlayer participant={local.clone()} label="You (Local)" is_local=true />
                    { main_tile }
                    { for extra_remotes }
                </main>
                if sidebar.is_some() {
                    <aside class="call-sidebar">
                        <nav class="tabs">{ for sidebar_tabs }</nav>
                        { sidebar_body }
                    </aside>
                }
            </div>

            <footer class="call-controls">
                <MicButton enabled={!snapshot.muted} disabled={!has_stream} onclick={on_mic} />
                <CameraButton enabled={snapshot.video_enabled} disabled={!has_stream} onclick={on_camera} />
                <ScreenShareButton active={snapshot.screen_sharing} disabled={!has_stream} onclick={on_share} />
                <ChatButton open={*sidebar == Some(SidebarTab::Chat)} onclick={toggle_tab(SidebarTab::Chat)} />
                <AssistantButton open={*sidebar == Some(SidebarTab::Assistant)} onclick={toggle_tab(SidebarTab::Assistant)} />
                <HandRaiseButton raised={local.hand_raised} disabled={!has_stream} onclick={on_hand} />
                <HangUpButton onclick={on_hang_up} />
            </footer>
        </div>
    }
}
