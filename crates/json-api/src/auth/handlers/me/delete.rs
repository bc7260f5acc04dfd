//! Delete Account Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    auth::into_api_error, envelope::Envelope, errors::ApiError, extensions::*, state::State,
};

/// Delete Account Handler
///
/// Removes the account along with its login codes. Orders placed by the
/// account are kept for record keeping.
#[endpoint(
    tags("auth"),
    summary = "Delete the current user's account",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Envelope<String>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let current = depot.current_user_or_401()?;

    state
        .app
        .auth
        .delete_account(current.uuid)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::message("Account deleted")))
}
