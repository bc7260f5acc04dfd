//! Order endpoint handlers.

pub(crate) mod all;
pub(crate) mod cancel;
pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index_mine;
pub(crate) mod update_status;
