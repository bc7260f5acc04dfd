//! Auth error mapping.

use kore_app::auth::AuthServiceError;
use tracing::error;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: AuthServiceError) -> ApiError {
    match error {
        AuthServiceError::AlreadyExists => ApiError::conflict("User already exists"),
        AuthServiceError::InvalidCredentials => ApiError::unauthorized("Invalid credentials"),
        AuthServiceError::InvalidToken(_) => ApiError::unauthorized("Invalid or expired token"),
        AuthServiceError::OtpInvalid => ApiError::bad_request("Invalid OTP"),
        AuthServiceError::OtpUsed => ApiError::bad_request("OTP already used"),
        AuthServiceError::OtpExpired => ApiError::bad_request("OTP expired"),
        AuthServiceError::UserNotFound => ApiError::not_found("User not found"),
        AuthServiceError::Password(source) => {
            error!("password processing failed: {source}");

            ApiError::internal()
        }
        AuthServiceError::Token(source) => {
            error!("token processing failed: {source}");

            ApiError::internal()
        }
        AuthServiceError::Sql(source) => {
            error!("auth storage error: {source}");

            ApiError::internal()
        }
    }
}
