//! Menu catalog: items, categories and dish images.

mod errors;
pub mod models;
mod repository;
mod service;

pub use errors::*;
pub use service::*;
