//! Order error mapping.

use kore_app::domain::orders::OrderServiceError;
use tracing::error;

use crate::errors::ApiError;

/// Map an order service failure to an HTTP error response.
pub(crate) fn into_api_error(error: OrderServiceError) -> ApiError {
    match error {
        OrderServiceError::EmptyOrder => {
            ApiError::bad_request("Order must contain at least one item")
        }
        OrderServiceError::UnknownMenuItem(item) => {
            ApiError::bad_request(format!("Unknown menu item: {item}"))
        }
        OrderServiceError::InvalidQuantity { item } => {
            ApiError::bad_request(format!("Invalid quantity for item: {item}"))
        }
        OrderServiceError::NotFound => ApiError::not_found("Order not found"),
        OrderServiceError::Forbidden => ApiError::forbidden("Not your order"),
        OrderServiceError::Transition(reason) => ApiError::bad_request(reason.to_string()),
        OrderServiceError::UserNotFound => ApiError::not_found("User not found"),
        OrderServiceError::Sql(source) => {
            error!("order operation failed: {source}");

            ApiError::internal()
        }
    }
}
