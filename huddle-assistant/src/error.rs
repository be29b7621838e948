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

//! Error types for the assistant and its text-generation client.

use thiserror::Error;

/// Errors returned by [`TextGenerator`](crate::TextGenerator)
/// implementations and by the [`Assistant`](crate::Assistant).
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The session is missing, expired, or invalid (HTTP 401).
    #[error("Not authenticated. Please log in.")]
    NotAuthenticated,

    /// A server error with status code and body.
    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The prompt or question was blank.
    #[error("Prompt is empty")]
    EmptyPrompt,

    /// A question is already being answered.
    #[error("The assistant is busy answering another question")]
    Busy,

    /// A configuration error (e.g. missing base URL).
    #[error("Configuration error: {0}")]
    Config(String),
}
