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

use crate::time::clock_label;
use huddle_client::ChatMessage;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub messages: Vec<ChatMessage>,
    /// Emitted with the trimmed draft; never empty.
    pub on_send: Callback<String>,
}

/// The trimmed draft, or `None` when there is nothing to send.
pub fn sendable(draft: &str) -> Option<String> {
    let text = draft.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let draft = use_state(String::new);

    let send = {
        let draft = draft.clone();
        let on_send = props.on_send.clone();
        Callback::from(move |_: ()| {
            if let Some(text) = sendable(&draft) {
                on_send.emit(text);
                draft.set(String::new());
            }
        })
    };

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let on_keydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send.emit(());
            }
        })
    };

    let on_click = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send.emit(()))
    };

    html! {
        <div class="chat-panel">
            <div class="chat-messages">
                { for props.messages.iter().map(|m| html! {
                    <div key={m.id} class={classes!("chat-message", m.from_assistant.then_some("assistant"))}>
                        <div class="chat-message-header">
                            <span class="chat-sender">{ m.sender.clone() }</span>
                            <span class="chat-time">{ clock_label(m.sent_at_ms) }</span>
                        </div>
                        <p class="chat-text">{ m.text.clone() }</p>
                    </div>
                }) }
            </div>
            <div class="chat-input-row">
                <input
                    class="chat-input"
                    type="text"
                    placeholder="Type a message..."
                    value={(*draft).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <button
                    class="chat-send"
                    disabled={sendable(&draft).is_none()}
                    onclick={on_click}
                >
                    {"Send"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_drafts_are_not_sendable() {
        assert_eq!(sendable(""), None);
        assert_eq!(sendable("   \n"), None);
        assert_eq!(sendable("  hi there "), Some("hi there".to_string()));
    }
}
