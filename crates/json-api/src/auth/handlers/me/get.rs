//! Get Profile Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    auth::{UserResponse, into_api_error},
    envelope::Envelope,
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Profile Handler
///
/// Returns the account behind the presented bearer token.
#[endpoint(
    tags("auth"),
    summary = "Get the current user's profile",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Envelope<UserResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let current = depot.current_user_or_401()?;

    let user = state
        .app
        .auth
        .profile(current.uuid)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::data(user.into())))
}
