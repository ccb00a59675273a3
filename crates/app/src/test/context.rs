//! Test context for service-level integration tests.

use crate::{database::Db, domain::promotions::PgPromotionsService};

use super::db::TestDb;

pub struct TestContext {
    #[expect(dead_code, reason = "held so the database outlives the test")]
    pub db: TestDb,
    pub promotions: PgPromotionsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = TestDb::new().await;

        Self {
            promotions: PgPromotionsService::new(Db::new(db.pool().clone())),
            db,
        }
    }
}
