//! Auth data models.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// Authorization role carried on every user and in token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

/// Error returned when parsing an unknown role value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Role::Admin),
            "customer" => Ok(Role::Customer),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// User Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub uuid: UserUuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
}

impl User {
    /// The name used to address the user in notifications.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

/// Registration payload.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Profile update payload.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Identity established from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub uuid: UserUuid,
    pub email: String,
    pub role: Role,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Successful login or OTP verification result.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub token: String,
    pub user: User,
}

/// One-time password persistence record.
#[derive(Debug, Clone)]
pub(crate) struct OtpRecord {
    pub uuid: Uuid,
    #[allow(dead_code, reason = "read back for log context only")]
    pub email: String,
    pub expires_at: Timestamp,
    pub used: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips() {
        for role in [Role::Admin, Role::Customer] {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role), "role {role}");
        }

        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let mut user = User {
            uuid: UserUuid::new(),
            username: "asha".to_string(),
            email: "asha@example.com".to_string(),
            role: Role::Customer,
            name: None,
            phone: None,
            created_at: Timestamp::UNIX_EPOCH,
        };

        assert_eq!(user.display_name(), "asha");

        user.name = Some("Asha Rao".to_string());

        assert_eq!(user.display_name(), "Asha Rao");
    }
}
