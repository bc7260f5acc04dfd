//! Get Menu Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    envelope::Envelope,
    errors::ApiError,
    extensions::*,
    menu::{MenuItemResponse, into_api_error},
    state::State,
};

/// Get Menu Item Handler
///
/// Returns a single dish.
#[endpoint(
    tags("menu"),
    summary = "Get a menu item",
    responses(
        (status_code = StatusCode::NOT_FOUND, description = "Menu item not found"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Envelope<MenuItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .menu
        .get(item.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::data(item.into())))
}
