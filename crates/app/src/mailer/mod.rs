//! Outbound email notifications.
//!
//! The mailer is a constructed, passed-in dependency rather than a
//! process-wide transporter, so services can be tested against a mock
//! and the relay swapped without touching call sites.

mod http;
mod messages;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

pub use http::{HttpMailer, MailRelayConfig};
pub use messages::{order_confirmation_email, otp_email};

/// A rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Errors that can occur while handing a message to the relay.
#[derive(Debug, Error)]
pub enum MailerError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay returned a non-2xx response.
    #[error("unexpected response from mail relay: {0}")]
    UnexpectedResponse(String),
}

/// Best-effort email delivery.
#[automock]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailerError>;
}
