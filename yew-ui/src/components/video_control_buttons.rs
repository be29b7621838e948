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

//! Call control buttons with SVG icons.
//!
//! Every button renders a `.video-control-button` with a `.tooltip` label.
//! `active` marks a toggled-on state and `disabled` buttons ignore clicks.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct ControlButtonProps {
    tooltip: AttrValue,
    #[prop_or_default]
    active: bool,
    #[prop_or_default]
    disabled: bool,
    #[prop_or_default]
    danger: bool,
    onclick: Callback<MouseEvent>,
    children: Html,
}

#[function_component(ControlButton)]
fn control_button(props: &ControlButtonProps) -> Html {
    let class = classes!(
        "video-control-button",
        props.active.then_some("active"),
        props.disabled.then_some("disabled"),
        props.danger.then_some("danger"),
    );
    let onclick = if props.disabled {
        Callback::noop()
    } else {
        props.onclick.clone()
    };

    html! {
        <button {class} disabled={props.disabled} {onclick}>
            { props.children.clone() }
            <span class="tooltip">{ props.tooltip.clone() }</span>
        </button>
    }
}

fn icon(body: Html) -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            { body }
        </svg>
    }
}

// =============================================================================
// Microphone Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct MicButtonProps {
    /// True while the microphone is live (not muted).
    pub enabled: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(MicButton)]
pub fn mic_button(props: &MicButtonProps) -> Html {
    let (tooltip, body) = if props.enabled {
        (
            "Mute",
            html! {
                <>
                    <path d="M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3z"></path>
                    <path d="M19 10v2a7 7 0 0 1-14 0v-2"></path>
                    <line x1="12" y1="19" x2="12" y2="22"></line>
                </>
            },
        )
    } else {
        (
            "Unmute",
            html! {
                <>
                    <line x1="1" y1="1" x2="23" y2="23"></line>
                    <path d="M9 9v3a3 3 0 0 0 5.12 2.12M15 9.34V5a3 3 0 0 0-5.94-.6"></path>
                    <path d="M17 16.95A7 7 0 0 1 5 12v-2m14 0v2a7 7 0 0 1-.11 1.23"></path>
                    <line x1="12" y1="19" x2="12" y2="22"></line>
                </>
            },
        )
    };

    html! {
        <ControlButton {tooltip} active={props.enabled} disabled={props.disabled} onclick={props.onclick.clone()}>
            { icon(body) }
        </ControlButton>
    }
}

// =============================================================================
// Camera Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct CameraButtonProps {
    pub enabled: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(CameraButton)]
pub fn camera_button(props: &CameraButtonProps) -> Html {
    let (tooltip, body) = if props.enabled {
        (
            "Stop Video",
            html! {
                <>
                    <polygon points="23 7 16 12 23 17 23 7"></polygon>
                    <rect x="1" y="5" width="15" height="14" rx="2" ry="2"></rect>
                </>
            },
        )
    } else {
        (
            "Start Video",
            html! {
                <>
                    <path d="M16 16v1a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2h2m5.66 0H14a2 2 0 0 1 2 2v3.34l1 1L23 7v10"></path>
                    <line x1="1" y1="1" x2="23" y2="23"></line>
                </>
            },
        )
    };

    html! {
        <ControlButton {tooltip} active={props.enabled} disabled={props.disabled} onclick={props.onclick.clone()}>
            { icon(body) }
        </ControlButton>
    }
}

// =============================================================================
// Screen Share Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct ScreenShareButtonProps {
    pub active: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ScreenShareButton)]
pub fn screen_share_button(props: &ScreenShareButtonProps) -> Html {
    let tooltip = if props.active {
        "Stop Screen Share"
    } else {
        "Share Screen"
    };

    html! {
        <ControlButton {tooltip} active={props.active} disabled={props.disabled} onclick={props.onclick.clone()}>
            { icon(html! {
                <>
                    <rect x="2" y="3" width="20" height="14" rx="2" ry="2"></rect>
                    <line x1="8" y1="21" x2="16" y2="21"></line>
                    <line x1="12" y1="17" x2="12" y2="21"></line>
                </>
            }) }
        </ControlButton>
    }
}

// =============================================================================
// Chat Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct PanelButtonProps {
    pub open: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ChatButton)]
pub fn chat_button(props: &PanelButtonProps) -> Html {
    let tooltip = if props.open { "Close Chat" } else { "Open Chat" };
    html! {
        <ControlButton {tooltip} active={props.open} onclick={props.onclick.clone()}>
            { icon(html! {
                <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"></path>
            }) }
        </ControlButton>
    }
}

// =============================================================================
// Assistant Button
// =============================================================================

#[function_component(AssistantButton)]
pub fn assistant_button(props: &PanelButtonProps) -> Html {
    let tooltip = if props.open {
        "Hide Assistant"
    } else {
        "Show Assistant"
    };
    html! {
        <ControlButton {tooltip} active={props.open} onclick={props.onclick.clone()}>
            { icon(html! {
                <>
                    <path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"></path>
                    <path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"></path>
                </>
            }) }
        </ControlButton>
    }
}

// =============================================================================
// Hand Raise Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct HandRaiseButtonProps {
    pub raised: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(HandRaiseButton)]
pub fn hand_raise_button(props: &HandRaiseButtonProps) -> Html {
    let tooltip = if props.raised {
        "Lower Hand"
    } else {
        "Raise Hand"
    };
    html! {
        <ControlButton {tooltip} active={props.raised} disabled={props.disabled} onclick={props.onclick.clone()}>
            { icon(html! {
                <>
                    <path d="M18 11V6a2 2 0 0 0-4 0v5"></path>
                    <path d="M14 10V4a2 2 0 0 0-4 0v2"></path>
                    <path d="M10 10.5V6a2 2 0 0 0-4 0v8"></path>
                    <path d="M18 8a2 2 0 1 1 4 0v6a8 8 0 0 1-8 8h-2c-2.8 0-4.5-.86-5.99-2.34l-3.6-3.6a2 2 0 0 1 2.83-2.82L7 15"></path>
                </>
            }) }
        </ControlButton>
    }
}

// =============================================================================
// Hang Up Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct HangUpButtonProps {
    pub onclick: Callback<MouseEvent>,
}

#[function_component(HangUpButton)]
pub fn hang_up_button(props: &HangUpButtonProps) -> Html {
    html! {
        <ControlButton tooltip="End Call" danger=true onclick={props.onclick.clone()}>
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="currentColor" viewBox="0 0 24 24">
                <path d="M12.017 6.995c-2.306 0-4.534.408-6.215 1.507-1.737 1.135-2.788 2.944-2.797 5.451a4.8 4.8 0 0 0 .01.62c.015.193.047.512.138.763a2.557 2.557 0 0 0 2.579 1.677H7.31a2.685 2.685 0 0 0 2.685-2.684v-.645a.684.684 0 0 1 .684-.684h2.647a.686.686 0 0 1 .686.687v.645c0 .712.284 1.395.787 1.898.478.478 1.101.787 1.847.787h1.647a2.555 2.555 0 0 0 2.575-1.674c.09-.25.123-.57.137-.763.015-.2.022-.433.01-.617-.002-2.508-1.049-4.32-2.785-5.458-1.68-1.1-3.907-1.51-6.213-1.51Z"/>
            </svg>
        </ControlButton>
    }
}
