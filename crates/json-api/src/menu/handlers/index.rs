//! Menu Index Handler

use std::sync::Arc;

use kore::Category;
use kore_app::domain::menu::models::MenuFilter;
use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    envelope::Envelope,
    errors::ApiError,
    extensions::*,
    menu::{MenuItemResponse, into_api_error},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MenuResponse {
    /// The list of dishes
    pub items: Vec<MenuItemResponse>,
}

/// Menu Index Handler
///
/// Returns the menu, optionally narrowed by `category` or
/// `vegetarian=true`.
#[endpoint(
    tags("menu"),
    summary = "List the menu",
    responses(
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown category"),
    ),
)]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    vegetarian: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<Envelope<MenuResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = category
        .into_inner()
        .map(|value| {
            value
                .parse::<Category>()
                .map_err(|_ignored| ApiError::bad_request(format!("Unknown category: {value}")))
        })
        .transpose()?;

    let filter = MenuFilter {
        category,
        vegetarian_only: vegetarian.into_inner().unwrap_or(false),
    };

    let items = state
        .app
        .menu
        .list(filter)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::data(MenuResponse {
        items: items.into_iter().map(Into::into).collect(),
    })))
}
