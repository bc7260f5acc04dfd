//! Auth service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error as ThisError;

use crate::auth::{password::PasswordError, token::TokenError};

#[derive(Debug, ThisError)]
pub enum AuthServiceError {
    #[error("user already exists")]
    AlreadyExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid or expired token")]
    InvalidToken(#[source] TokenError),

    #[error("invalid OTP")]
    OtpInvalid,

    #[error("OTP already used")]
    OtpUsed,

    #[error("OTP expired")]
    OtpExpired,

    #[error("user not found")]
    UserNotFound,

    #[error("password processing error")]
    Password(#[from] PasswordError),

    #[error("token processing error")]
    Token(#[from] TokenError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::UserNotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
