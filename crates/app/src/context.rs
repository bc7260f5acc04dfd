//! Application context wiring.

use std::sync::Arc;

use crate::{
    auth::{AuthService, PgAuthService, TokenCodec},
    database::Db,
    domain::{
        menu::{MenuService, PgMenuService},
        orders::{OrderService, PgOrderService},
    },
    mailer::Mailer,
};

/// The services an API surface or CLI command operates on.
#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub menu: Arc<dyn MenuService>,
    pub orders: Arc<dyn OrderService>,
}

impl AppContext {
    /// Wire the Postgres-backed services onto one pool.
    #[must_use]
    pub fn new(db: &Db, tokens: TokenCodec, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            auth: Arc::new(PgAuthService::new(
                db.clone(),
                tokens,
                Arc::clone(&mailer),
            )),
            menu: Arc::new(PgMenuService::new(db.clone())),
            orders: Arc::new(PgOrderService::new(db.clone(), mailer)),
        }
    }
}
