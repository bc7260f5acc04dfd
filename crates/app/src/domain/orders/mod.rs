//! Order lifecycle: placement, listing and status transitions.

mod errors;
pub mod models;
mod repository;
mod service;

pub use errors::*;
pub use service::*;
