//! Order endpoints.

pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod models;

pub(crate) use errors::into_api_error;
pub(crate) use models::OrderResponse;
