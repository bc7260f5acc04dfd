//! Authentication

mod errors;
pub(crate) mod handlers;
pub(crate) mod middleware;
mod models;

pub(crate) use errors::*;
pub(crate) use models::*;
