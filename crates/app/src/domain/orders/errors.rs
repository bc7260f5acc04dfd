//! Order service errors.

use kore::TransitionError;
use sqlx::Error;
use thiserror::Error as ThisError;

use crate::domain::menu::models::MenuItemUuid;

#[derive(Debug, ThisError)]
pub enum OrderServiceError {
    #[error("order must contain at least one item")]
    EmptyOrder,

    #[error("menu item not found: {0}")]
    UnknownMenuItem(MenuItemUuid),

    #[error("invalid quantity for item: {item}")]
    InvalidQuantity { item: String },

    #[error("order not found")]
    NotFound,

    #[error("order belongs to another user")]
    Forbidden,

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("user not found")]
    UserNotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrderServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
