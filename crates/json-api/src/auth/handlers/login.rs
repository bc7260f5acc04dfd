//! Login Handler

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

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login Handler
///
/// Exchanges an email and password for a bearer token.
#[endpoint(
    tags("auth"),
    summary = "Log in",
    responses(
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<Envelope<AuthResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let tokens = state
        .app
        .auth
        .login(&request.email, &request.password)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::data(tokens.into())))
}
