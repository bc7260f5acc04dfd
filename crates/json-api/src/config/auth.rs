//! Auth Config

use clap::Args;
use kore_app::auth::DEFAULT_TOKEN_TTL_SECONDS;

/// Token signing settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Secret used to sign and verify bearer tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Token lifetime in seconds
    #[arg(long, env = "TOKEN_TTL_SECONDS", default_value_t = DEFAULT_TOKEN_TTL_SECONDS)]
    pub token_ttl_seconds: i64,
}
