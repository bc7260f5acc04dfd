//! Depot helper extensions.

use std::any::Any;

use kore_app::auth::AuthenticatedUser;
use salvo::prelude::Depot;

use crate::errors::ApiError;

const CURRENT_USER_KEY: &str = "current_user";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_current_user(&mut self, user: AuthenticatedUser);

    fn current_user_or_401(&self) -> Result<AuthenticatedUser, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| ApiError::internal())
    }

    fn insert_current_user(&mut self, user: AuthenticatedUser) {
        self.insert(CURRENT_USER_KEY, user);
    }

    fn current_user_or_401(&self) -> Result<AuthenticatedUser, ApiError> {
        self.get::<AuthenticatedUser>(CURRENT_USER_KEY)
            .cloned()
            .map_err(|_ignored| ApiError::unauthorized("Not authenticated"))
    }
}
