//! Request OTP Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::into_api_error, envelope::Envelope, errors::ApiError, extensions::*, state::State,
};

/// OTP Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OtpRequest {
    pub email: String,
}

/// Request OTP Handler
///
/// Emails a one-time login code. Answers 200 whether or not the address
/// is registered, so the endpoint cannot be used to probe for accounts.
#[endpoint(tags("auth"), summary = "Request a one-time login code")]
pub(crate) async fn handler(
    json: JsonBody<OtpRequest>,
    depot: &mut Depot,
) -> Result<Json<Envelope<String>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .auth
        .request_otp(&json.into_inner().email)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::message("OTP sent if the email exists")))
}
