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

//! Tabbed editor over [`UserSettings`]. Edits stay in a local draft until
//! saved into the shared settings context.

use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::SettingsCtx;
use crate::routing::Route;
use crate::settings::{SettingsTab, UserSettings, VideoQuality};

type Edit<T> = fn(&mut UserSettings, T);

/// Callback that applies `edit` to a copy of the draft.
fn editor<T: 'static>(draft: &UseStateHandle<UserSettings>, edit: Edit<T>) -> Callback<T> {
    let draft = draft.clone();
    Callback::from(move |value: T| {
        let mut next = (*draft).clone();
        edit(&mut next, value);
        draft.set(next);
    })
}

fn toggle_row(label: &str, checked: bool, on_change: Callback<bool>) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(input.checked());
    });
    html! {
        <label class="settings-toggle">
            <input type="checkbox" {checked} {onchange} />
            <span>{ label.to_string() }</span>
        </label>
    }
}

fn text_row(label: &str, value: &str, on_change: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(input.value());
    });
    html! {
        <label class="settings-field">
            <span>{ label.to_string() }</span>
            <input type="text" value={value.to_string()} {oninput} />
        </label>
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let navigator = use_navigator();
    let settings_ctx = use_context::<SettingsCtx>();
    let initial = settings_ctx
        .as_ref()
        .map(|ctx| (**ctx).clone())
        .unwrap_or_default();
    let draft = use_state(move || initial);
    let tab = use_state(|| SettingsTab::Profile);

    let on_save = {
        let draft = draft.clone();
        let settings_ctx = settings_ctx.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Saving settings: {:?}", *draft);
            if let Some(ctx) = &settings_ctx {
                ctx.set((*draft).clone());
            }
        })
    };

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Dashboard);
        }
    });

    let tabs = SettingsTab::ALL.iter().map(|t| {
        let onclick = {
            let tab = tab.clone();
            let t = *t;
            Callback::from(move |_: MouseEvent| tab.set(t))
        };
        html! {
            <button key={t.to_string()} class={classes!("tab", (*tab == *t).then_some("active"))} {onclick}>
                { t.label() }
            </button>
        }
    });

    let s = &*draft;
    let body = match *tab {
        SettingsTab::Profile => html! {
            <>
                { text_row("Display Name", &s.display_name, editor(&draft, |s, v| s.display_name = v)) }
                { text_row("Email", &s.email, editor(&draft, |s, v| s.email = v)) }
            </>
        },
        SettingsTab::Notifications => html! {
            <>
                { toggle_row("Meeting reminders", s.notifications.meeting_reminders,
                    editor(&draft, |s, v| s.notifications.meeting_reminders = v)) }
                { toggle_row("AI insights", s.notifications.ai_insights,
                    editor(&draft, |s, v| s.notifications.ai_insights = v)) }
                { toggle_row("Chat messages", s.notifications.chat_messages,
                    editor(&draft, |s, v| s.notifications.chat_messages = v)) }
                { toggle_row("Email reports", s.notifications.email_reports,
                    editor(&draft, |s, v| s.notifications.email_reports = v)) }
            </>
        },
        SettingsTab::Video => {
            let on_quality = editor(&draft, |s, v: VideoQuality| s.video.quality = v);
            let onchange = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                if let Some(quality) = VideoQuality::parse(&select.value()) {
                    on_quality.emit(quality);
                }
            });
            html! {
                <>
                    <label class="settings-field">
                        <span>{"Video quality"}</span>
                        <select {onchange}>
                            { for VideoQuality::ALL.iter().map(|q| html! {
                                <option value={q.as_str()} selected={*q == s.video.quality}>{ q.label() }</option>
                            }) }
                        </select>
                    </label>
                    { toggle_row("Join with video on", s.video.auto_join_video,
                        editor(&draft, |s, v| s.video.auto_join_video = v)) }
                    { toggle_row("Virtual background", s.video.virtual_background,
                        editor(&draft, |s, v| s.video.virtual_background = v)) }
                    { toggle_row("Mirror my video", s.video.mirror_video,
                        editor(&draft, |s, v| s.video.mirror_video = v)) }
                </>
            }
        }
        SettingsTab::Audio => {
            let on_gain = editor(&draft, |s, v: u8| s.audio.microphone_gain = v);
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                if let Ok(gain) = input.value().parse::<u8>() {
                    on_gain.emit(gain.min(100));
                }
            });
            html! {
                <>
                    { toggle_row("Join muted", s.audio.auto_join_muted,
                        editor(&draft, |s, v| s.audio.auto_join_muted = v)) }
                    { toggle_row("Noise cancellation", s.audio.noise_cancellation,
                        editor(&draft, |s, v| s.audio.noise_cancellation = v)) }
                    { toggle_row("Echo cancellation", s.audio.echo_cancellation,
                        editor(&draft, |s, v| s.audio.echo_cancellation = v)) }
                    <label class="settings-field">
                        <span>{ format!("Microphone gain: {}%", s.audio.microphone_gain) }</span>
                        <input type="range" min="0" max="100"
                            value={s.audio.microphone_gain.to_string()} {oninput} />
                    </label>
                </>
            }
        }
        SettingsTab::Assistant => html! {
            <>
                { toggle_row("Enable AI assistant", s.assistant.enable_assistant,
                    editor(&draft, |s, v| s.assistant.enable_assistant = v)) }
                { toggle_row("Automatic transcription", s.assistant.auto_transcription,
                    editor(&draft, |s, v| s.assistant.auto_transcription = v)) }
                { toggle_row("Smart suggestions", s.assistant.smart_suggestions,
                    editor(&draft, |s, v| s.assistant.smart_suggestions = v)) }
                { toggle_row("Engagement tracking", s.assistant.engagement_tracking,
                    editor(&draft, |s, v| s.assistant.engagement_tracking = v)) }
                { toggle_row("Voice interaction", s.assistant.voice_interaction,
                    editor(&draft, |s, v| s.assistant.voice_interaction = v)) }
            </>
        },
        SettingsTab::Privacy => html! {
            <>
                { toggle_row("Recording consent", s.privacy.recording_consent,
                    editor(&draft, |s, v| s.privacy.recording_consent = v)) }
                { toggle_row("Share usage data", s.privacy.data_sharing,
                    editor(&draft, |s, v| s.privacy.data_sharing = v)) }
                { toggle_row("Opt out of analytics", s.privacy.analytics_opt_out,
                    editor(&draft, |s, v| s.privacy.analytics_opt_out = v)) }
            </>
        },
    };

    html! {
        <div class="settings-page">
            <header class="settings-header">
                <button class="btn-secondary" onclick={on_back}>{"Back to Dashboard"}</button>
                <h1>{"Settings"}</h1>
                <button class="btn-primary" onclick={on_save}>{"Save Changes"}</button>
            </header>
            <nav class="tabs">{ for tabs }</nav>
            <section class="settings-body">{ body }</section>
        </div>
    }
}
