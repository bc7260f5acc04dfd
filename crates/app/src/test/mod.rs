//! Shared infrastructure for service-level database tests.

mod context;
pub(crate) mod helpers;

pub(crate) use context::TestContext;
