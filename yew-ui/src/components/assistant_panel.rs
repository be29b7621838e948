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

//! Sidebar tab with live call analytics, the insight feed and a box for
//! asking the assistant questions.

use crate::components::chat_panel::sendable;
use crate::components::config_error::ConfigError;
use crate::time::clock_label;
use huddle_assistant::Insight;
use huddle_client::CallAnalytics;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

const WAITING_FOR_INSIGHTS: &str =
    "I'm analyzing the conversation and will provide insights shortly...";

#[derive(Properties, PartialEq)]
pub struct AssistantPanelProps {
    pub analytics: CallAnalytics,
    pub insights: Vec<Insight>,
    /// A question is being answered.
    #[prop_or_default]
    pub thinking: bool,
    /// Why the assistant is unavailable, if it is.
    #[prop_or_default]
    pub config_error: Option<String>,
    pub on_ask: Callback<String>,
}

#[function_component(AssistantPanel)]
pub fn assistant_panel(props: &AssistantPanelProps) -> Html {
    let question = use_state(String::new);

    let ask = {
        let question = question.clone();
        let on_ask = props.on_ask.clone();
        let thinking = props.thinking;
        Callback::from(move |_: ()| {
            if thinking {
                return;
            }
            if let Some(text) = sendable(&question) {
                on_ask.emit(text);
                question.set(String::new());
            }
        })
    };

    let on_input = {
        let question = question.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            question.set(input.value());
        })
    };

    let on_keydown = {
        let ask = ask.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                ask.emit(());
            }
        })
    };

    let analytics = &props.analytics;
    let insights = if props.insights.is_empty() {
        html! { <p class="insight-placeholder">{ WAITING_FOR_INSIGHTS }</p> }
    } else {
        html! {
            <ul class="insight-list">
                { for props.insights.iter().map(insight_card) }
            </ul>
        }
    };

    html! {
        <div class="assistant-panel">
            <h3>{"AI Teaching Assistant"}</h3>
            <div class="analytics-grid">
                <div class="analytics-item">
                    <span class="analytics-label">{"Duration"}</span>
                    <span class="analytics-value">{ format!("{}m", analytics.duration_minutes()) }</span>
                </div>
                <div class="analytics-item">
                    <span class="analytics-label">{"Engagement"}</span>
                    <span class="analytics-value">{ format!("{}%", analytics.engagement_score) }</span>
                </div>
                <div class="analytics-item">
                    <span class="analytics-label">{"Questions"}</span>
                    <span class="analytics-value">{ analytics.questions_asked }</span>
                </div>
            </div>
            {
                match &props.config_error {
                    Some(message) => html! { <ConfigError message={message.clone()} /> },
                    None => html! {
                        <>
                            { insights }
                            <div class="assistant-ask-row">
                                <input
                                    class="assistant-input"
                                    type="text"
                                    placeholder="Ask the AI assistant..."
                                    value={(*question).clone()}
                                    disabled={props.thinking}
                                    oninput={on_input}
                                    onkeydown={on_keydown}
                                />
                                <button
                                    class="assistant-ask"
                                    disabled={props.thinking || sendable(&question).is_none()}
                                    onclick={Callback::from(move |_: MouseEvent| ask.emit(()))}
                                >
                                    { if props.thinking { "Thinking..." } else { "Ask" } }
                                </button>
                            </div>
                        </>
                    },
                }
            }
        </div>
    }
}

fn insight_card(insight: &Insight) -> Html {
    html! {
        <li key={insight.id} class={classes!("insight-card", format!("priority-{}", insight.priority.as_str()))}>
            <div class="insight-header">
                <span class="insight-title">{ insight.title.clone() }</span>
                <span class="insight-time">{ clock_label(insight.created_at_ms) }</span>
            </div>
            <p class="insight-content">{ insight.content.clone() }</p>
        </li>
    }
}
