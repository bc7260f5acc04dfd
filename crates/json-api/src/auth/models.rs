//! Auth response payloads.

use kore_app::auth::{AuthTokens, User};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// The unique identifier of the user
    pub uuid: Uuid,

    /// Login name
    pub username: String,

    /// Email address
    pub email: String,

    /// Authorization role, `admin` or `customer`
    pub role: String,

    /// Display name
    pub name: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,

    /// The date and time the account was created
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            uuid: user.uuid.into(),
            username: user.username,
            email: user.email,
            role: user.role.to_string(),
            name: user.name,
            phone: user.phone,
            created_at: user.created_at.to_string(),
        }
    }
}

/// A bearer token with the user it identifies.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AuthResponse {
    /// Signed bearer token
    pub token: String,

    /// The authenticated user
    pub user: UserResponse,
}

impl From<AuthTokens> for AuthResponse {
    fn from(tokens: AuthTokens) -> Self {
        AuthResponse {
            token: tokens.token,
            user: tokens.user.into(),
        }
    }
}
