//! HTTP mail relay client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::mailer::{EmailMessage, Mailer, MailerError};

/// Configuration for the HTTP mail relay.
#[derive(Debug, Clone)]
pub struct MailRelayConfig {
    /// Relay base address, e.g. `"http://localhost:8025"`.
    pub addr: String,

    /// Bearer token for the relay API.
    pub token: String,

    /// Sender address stamped on every message.
    pub from: String,
}

/// Mailer that posts messages to an HTTP mail relay.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    config: MailRelayConfig,
    http: Client,
}

#[derive(Debug, Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

impl HttpMailer {
    /// Create a new mailer from the given configuration.
    #[must_use]
    pub fn new(config: MailRelayConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailerError> {
        let url = format!("{}/messages", self.config.addr);

        let body = RelayMessage {
            from: &self.config.from,
            to: &message.to,
            subject: &message.subject,
            text: &message.text,
            html: &message.html,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(MailerError::UnexpectedResponse(format!(
                "send failed with status {status}: {text}"
            )));
        }

        Ok(())
    }
}
