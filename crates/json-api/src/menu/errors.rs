//! Menu error mapping.

use kore_app::domain::menu::MenuServiceError;
use tracing::error;

use crate::errors::ApiError;

/// Map a menu service failure to an HTTP error response.
pub(crate) fn into_api_error(error: MenuServiceError) -> ApiError {
    match error {
        MenuServiceError::NotFound => ApiError::not_found("Menu item not found"),
        MenuServiceError::ImageNotFound => ApiError::not_found("Image not found"),
        MenuServiceError::AlreadyExists => {
            ApiError::conflict("A menu item with that name already exists")
        }
        MenuServiceError::Sql(source) => {
            error!("menu operation failed: {source}");

            ApiError::internal()
        }
    }
}
