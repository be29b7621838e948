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

//! Text generation for the huddle call view: a REST client for the
//! text-generation service, the rolling insight feed, and the in-call
//! assistant that answers questions.
//!
//! Works on WASM (browser) and native targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use huddle_assistant::{Assistant, AuthMode, MeetingContext, TextGenerationClient};
//!
//! # async fn example() -> Result<(), huddle_assistant::AssistantError> {
//! // Browser: cookies are sent automatically
//! let client = TextGenerationClient::new("http://localhost:8081", AuthMode::Cookie);
//! let assistant = Assistant::new(client);
//!
//! let context = MeetingContext::new(3, 12, 87);
//! let reply = assistant.answer("What did we decide?", &context).await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod assistant;
pub mod error;
pub mod insights;

pub use assistant::{Assistant, MeetingContext, APOLOGY, ASSISTANT_ANSWER_TOKENS};
pub use error::AssistantError;
pub use insights::{
    insight_prompt, Insight, InsightFeed, InsightKind, InsightPriority, InsightRequest,
    FIRST_INSIGHT_DELAY, INSIGHT_FEED_CAPACITY, INSIGHT_INTERVAL, INSIGHT_TOKENS,
};

use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Path of the text-generation endpoint, relative to the base URL.
pub const GENERATE_TEXT_PATH: &str = "/api/v1/ai/generate-text";

/// Produces text for a prompt.
///
/// [`TextGenerationClient`] talks to the HTTP service; tests substitute
/// their own. Futures run on a single-threaded executor and need not be
/// `Send`.
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, AssistantError>;
}

/// How the client authenticates with the text-generation service.
#[derive(Debug, Clone)]
pub enum AuthMode {
    /// Browser mode: send credentials (cookies) automatically via `fetch`.
    Cookie,
    /// Attach `Authorization: Bearer <token>` to every request.
    Bearer(String),
}

/// Body of a text-generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTextRequest {
    pub prompt: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateTextResponse {
    pub text: String,
}

/// A REST client for the text-generation service.
#[derive(Debug, Clone)]
pub struct TextGenerationClient {
    base_url: String,
    auth: AuthMode,
    http: Client,
}

impl TextGenerationClient {
    /// Create a new client pointing at the given base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://localhost:8081"`
    /// * `auth` - how to authenticate requests
    pub fn new(base_url: &str, auth: AuthMode) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            auth,
            http: Client::new(),
        }
    }

    /// Update the bearer token (e.g. after a token refresh).
    pub fn set_bearer_token(&mut self, token: String) {
        self.auth = AuthMode::Bearer(token);
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_auth(self.http.post(self.url(path)))
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            AuthMode::Cookie => {
                #[cfg(target_arch = "wasm32")]
                {
                    builder.fetch_credentials_include()
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    builder
                }
            }
            AuthMode::Bearer(token) => {
                builder.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"))
            }
        }
    }
}

impl TextGenerator for TextGenerationClient {
    /// Calls `POST /api/v1/ai/generate-text`.
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, AssistantError> {
        if self.base_url.is_empty() {
            return Err(AssistantError::Config(
                "text generation base URL is not set".to_string(),
            ));
        }
        if prompt.trim().is_empty() {
            return Err(AssistantError::EmptyPrompt);
        }
        let request = GenerateTextRequest {
            prompt: prompt.to_string(),
            max_tokens,
        };
        debug!("Requesting up to {max_tokens} tokens of generated text");
        let response = self.post(GENERATE_TEXT_PATH).json(&request).send().await?;
        let body: GenerateTextResponse = parse_response(response).await?;
        Ok(body.text)
    }
}

/// Decode a JSON body on success or map the status to [`AssistantError`].
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AssistantError> {
    let status = response.status().as_u16();
    match status {
        200 | 201 => Ok(response.json().await?),
        401 => Err(AssistantError::NotAuthenticated),
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(AssistantError::ServerError { status, body: text })
        }
    }
}
