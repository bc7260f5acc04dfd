//! Menu endpoint handlers.

pub(crate) mod categories;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod image;
pub(crate) mod index;
pub(crate) mod update;
pub(crate) mod upload;
