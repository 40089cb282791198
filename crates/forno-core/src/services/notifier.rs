//! Receipt delivery to the notification webhook.
//!
//! A one-way POST of `{"text": receipt}`; nothing is read back beyond
//! success or failure, and callers treat delivery as best-effort.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Serialize;
use thiserror::Error;

const WEBHOOK_URL: &str =
    "https://chicken-family-backend.liara.run/webhook/3577dcaa-94aa-44ba-b22d-0d4446fe2a62";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Notifier errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Webhook returned status {0}")]
    ApiError(u16),
}

/// External collaborator receiving the formatted receipt.
#[async_trait]
pub trait OrderNotifier: Send + Sync {
    /// Deliver the receipt text.
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
struct NotificationPayload<'a> {
    text: &'a str,
}

/// Webhook-backed notifier.
pub struct WebhookNotifier {
    http_client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    /// Creates a notifier against the fixed production webhook.
    pub fn new() -> Result<Self, NotifyError> {
        Self::with_url(WEBHOOK_URL)
    }

    /// Creates a notifier against a custom URL (used by tests).
    pub fn with_url(url: impl Into<String>) -> Result<Self, NotifyError> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl OrderNotifier for WebhookNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        debug!("Posting receipt to notification webhook");

        let response = self
            .http_client
            .post(&self.url)
            .json(&NotificationPayload { text })
            .send()
            .await
            .map_err(|e| NotifyError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::ApiError(status.as_u16()));
        }

        Ok(())
    }
}
