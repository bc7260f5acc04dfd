//! Mail Config

use clap::Args;

/// Mail relay settings.
#[derive(Debug, Args)]
pub struct MailConfig {
    /// Mail relay address
    #[arg(long, env = "MAIL_RELAY_ADDR")]
    pub relay_addr: String,

    /// Mail relay API token
    #[arg(long, env = "MAIL_RELAY_TOKEN", hide_env_values = true)]
    pub relay_token: String,

    /// Sender address stamped on outgoing mail
    #[arg(long, env = "MAIL_FROM", default_value = "no-reply@kore.example")]
    pub from: String,
}
