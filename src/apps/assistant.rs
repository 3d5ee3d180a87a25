/*!
 * Assistant Client
 * Blocking request/response bridge to the hosted OrbitOS assistant
 */

use log::warn;
use std::time::Duration;
use thiserror::Error;

/// Returned to the user whenever the request cannot be completed
pub const FALLBACK_REPLY: &str = "I apologize, but I encountered an error while processing \
your request. Please check your connection.";

const SYSTEM_INSTRUCTION: &str = "You are the core AI of OrbitOS, a highly customizable and \
futuristic web-based operating system. You are helpful, concise, and professional. You can \
help users with code, writing, or OS-related questions.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variables configuring the assistant endpoint
pub mod env {
    pub const ENDPOINT: &str = "ORBIT_AI_ENDPOINT";
    pub const API_KEY: &str = "ORBIT_AI_KEY";
}

#[derive(Error, Debug)]
enum AskError {
    #[error("API key is not configured")]
    MissingKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response payload")]
    Malformed,
}

/// Client for the assistant app.
///
/// `ask` never fails from the caller's point of view: any transport or
/// payload problem collapses into the fixed apology string.
pub struct Assistant {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl Assistant {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        }
    }

    /// Configure from `ORBIT_AI_ENDPOINT` / `ORBIT_AI_KEY`
    #[must_use]
    pub fn from_env() -> Self {
        let endpoint = std::env::var(env::ENDPOINT)
            .unwrap_or_else(|_| "https://api.orbitos.dev/v1/assistant".to_string());
        let api_key = std::env::var(env::API_KEY).ok();
        Self::new(endpoint, api_key)
    }

    /// Ask the assistant, folding every failure into the apology reply
    pub fn ask(&self, prompt: &str, context: Option<&str>) -> String {
        match self.request(prompt, context) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("assistant request failed: {e}");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    fn request(&self, prompt: &str, context: Option<&str>) -> Result<String, AskError> {
        let api_key = self.api_key.as_deref().ok_or(AskError::MissingKey)?;

        let system = format!(
            "{SYSTEM_INSTRUCTION} The current context is: {}.",
            context.unwrap_or("None")
        );
        let body = serde_json::json!({
            "system": system,
            "prompt": prompt,
            "temperature": 0.7,
        });

        let payload: serde_json::Value = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        payload
            .get("text")
            .and_then(|t| t.as_str())
            .map(str::to_string)
            .ok_or(AskError::Malformed)
    }
}
