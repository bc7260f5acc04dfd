//! Menu Categories Handler

use std::{string::ToString, sync::Arc};

use salvo::prelude::*;

use crate::{
    envelope::Envelope, errors::ApiError, extensions::*, menu::into_api_error, state::State,
};

/// Menu Categories Handler
///
/// Returns the distinct categories currently on the menu.
#[endpoint(tags("menu"), summary = "List menu categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Envelope<Vec<String>>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .menu
        .categories()
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::data(
        categories.iter().map(ToString::to_string).collect(),
    )))
}
