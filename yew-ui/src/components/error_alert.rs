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

//! Dismissible alert for session errors.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: String,
    /// Request media access again.
    pub on_retry: Callback<()>,
    pub on_dismiss: Callback<()>,
}

/// Errors about permissions or device access can be fixed by retrying the
/// request; anything else can only be dismissed.
pub fn is_retryable(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("permission") || message.contains("access")
}

#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    let action = if is_retryable(&props.message) {
        let on_retry = props.on_retry.clone();
        html! {
            <button class="alert-action" onclick={Callback::from(move |_| on_retry.emit(()))}>
                {"Retry"}
            </button>
        }
    } else {
        let on_dismiss = props.on_dismiss.clone();
        html! {
            <button class="alert-action" onclick={Callback::from(move |_| on_dismiss.emit(()))}>
                {"Dismiss"}
            </button>
        }
    };

    html! {
        <div class="alert alert-error" role="alert">
            <span class="alert-message">{ props.message.clone() }</span>
            { action }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_errors_are_retryable() {
        assert!(is_retryable(
            "Failed to access camera/microphone: Permission denied. Please check permissions and try again."
        ));
        assert!(is_retryable(
            "Screen sharing permission denied. Please allow screen sharing and try again."
        ));
        assert!(!is_retryable("Failed to toggle microphone"));
    }
}
