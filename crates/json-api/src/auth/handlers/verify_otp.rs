//! Verify OTP Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{AuthResponse, into_api_error},
    envelope::Envelope,
    errors::ApiError,
    extensions::*,
    state::State,
};

/// OTP Verification Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VerifyOtpRequest {
    pub email: String,
    pub code: String,
}

/// Verify OTP Handler
///
/// Exchanges a one-time code for a bearer token. Codes are single-use
/// and expire five minutes after issue.
#[endpoint(
    tags("auth"),
    summary = "Verify a one-time login code",
    responses(
        (status_code = StatusCode::BAD_REQUEST, description = "Code invalid, expired, or already used"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<VerifyOtpRequest>,
    depot: &mut Depot,
) -> Result<Json<Envelope<AuthResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let tokens = state
        .app
        .auth
        .verify_otp(&request.email, &request.code)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::data(tokens.into())))
}
