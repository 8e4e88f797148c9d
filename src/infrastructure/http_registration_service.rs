use async_trait::async_trait;
use tracing::debug;

use crate::domain::{
    error::ServiceError, models::registration::RegistrationPayload,
    services::registration_service::RegistrationService,
};

/// Environment variable naming the account endpoint's base URL.
const BASE_URL_VAR: &str = "REGISTRATION_API_URL";

/// reqwest-backed client for the remote account-creation endpoint.
#[derive(Debug, Clone)]
pub struct HttpRegistrationService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRegistrationService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL from `REGISTRATION_API_URL`, via the environment or a
    /// `.env` file.
    pub fn from_env() -> Result<Self, dotenvy::Error> {
        Ok(Self::new(dotenvy::var(BASE_URL_VAR)?))
    }
}

#[async_trait]
impl RegistrationService for HttpRegistrationService {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), ServiceError> {
        let url = format!("{}/api/register", self.base_url);
        debug!(%url, user_name = %payload.user_name, "posting registration");

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Read whatever the server said; an unreadable body still yields a
        // Rejected error, just without a detail.
        let body = response.text().await.unwrap_or_default();
        Err(ServiceError::Rejected {
            status: status.as_u16(),
            detail: extract_detail(&body),
        })
    }
}

/// Pull a human-readable message out of an error body: the string `detail`
/// field of a JSON object, a bare JSON string, or non-empty plain text.
fn extract_detail(body: &str) -> Option<String> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => map
            .get("detail")
            .and_then(|detail| detail.as_str())
            .map(str::to_string),
        Ok(serde_json::Value::String(text)) => Some(text),
        Ok(_) => None,
        Err(_) => {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
    }
}
