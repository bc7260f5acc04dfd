//! Test context for service-level integration tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    auth::{PgAuthService, TokenCodec},
    database::Db,
    domain::{menu::PgMenuService, orders::PgOrderService},
    mailer::{EmailMessage, Mailer, MailerError},
};

use super::db::TestDb;

/// Accepts every message without delivering it. Service tests assert
/// on persisted state, not on notifications.
struct NullMailer;

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, _message: &EmailMessage) -> Result<(), MailerError> {
        Ok(())
    }
}

pub(crate) struct TestContext {
    pub db: TestDb,
    pub auth: PgAuthService,
    pub menu: PgMenuService,
    pub orders: PgOrderService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        let tokens = TokenCodec::new("test-secret", 3600);
        let mailer: Arc<dyn Mailer> = Arc::new(NullMailer);

        Self {
            auth: PgAuthService::new(db.clone(), tokens, Arc::clone(&mailer)),
            menu: PgMenuService::new(db.clone()),
            orders: PgOrderService::new(db, mailer),
            db: test_db,
        }
    }
}
