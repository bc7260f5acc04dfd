//! Update Profile Handler

use std::sync::Arc;

use kore_app::auth::ProfileUpdate;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{UserResponse, into_api_error},
    envelope::Envelope,
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Profile Update Request
///
/// Omitted fields are left unchanged.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            name: request.name,
            phone: request.phone,
        }
    }
}

/// Update Profile Handler
#[endpoint(
    tags("auth"),
    summary = "Update the current user's profile",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<Envelope<UserResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let current = depot.current_user_or_401()?;

    let user = state
        .app
        .auth
        .update_profile(current.uuid, json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::data(user.into())))
}
