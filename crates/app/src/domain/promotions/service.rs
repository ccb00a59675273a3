//! Promotions Service

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::promotions::{
        PromotionsServiceError,
        data::PromotionData,
        models::{Promotion, PromotionId},
        repository::PgPromotionsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgPromotionsService {
    db: Db,
    repository: PgPromotionsRepository,
}

impl PgPromotionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPromotionsRepository::new(),
        }
    }
}

#[async_trait]
impl PromotionsService for PgPromotionsService {
    #[tracing::instrument(
        name = "promotions.service.list_promotions",
        skip(self),
        fields(count = tracing::field::Empty),
        err
    )]
    async fn list_promotions(&self) -> Result<Vec<Promotion>, PromotionsServiceError> {
        let mut tx = self.db.begin().await?;

        let promotions = self.repository.list_promotions(&mut tx).await?;

        tx.commit().await?;

        Span::current().record("count", promotions.len());

        Ok(promotions)
    }

    #[tracing::instrument(
        name = "promotions.service.find_promotion",
        skip(self),
        fields(promotion_id = %promotion),
        err
    )]
    async fn find_promotion(
        &self,
        promotion: PromotionId,
    ) -> Result<Option<Promotion>, PromotionsServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self.repository.find_promotion(&mut tx, promotion).await?;

        tx.commit().await?;

        Ok(found)
    }

    #[tracing::instrument(
        name = "promotions.service.find_by_status",
        skip(self),
        fields(count = tracing::field::Empty),
        err
    )]
    async fn find_by_status(&self, status: bool) -> Result<Vec<Promotion>, PromotionsServiceError> {
        let mut tx = self.db.begin().await?;

        let promotions = self.repository.find_by_status(&mut tx, status).await?;

        tx.commit().await?;

        Span::current().record("count", promotions.len());

        Ok(promotions)
    }

    #[tracing::instrument(
        name = "promotions.service.find_by_name",
        skip(self),
        fields(count = tracing::field::Empty),
        err
    )]
    async fn find_by_name(&self, name: &str) -> Result<Vec<Promotion>, PromotionsServiceError> {
        let mut tx = self.db.begin().await?;

        let promotions = self.repository.find_by_name(&mut tx, name).await?;

        tx.commit().await?;

        Span::current().record("count", promotions.len());

        Ok(promotions)
    }

    #[tracing::instrument(
        name = "promotions.service.create_promotion",
        skip(self, promotion),
        fields(
            promotion_id = tracing::field::Empty,
            promotion_type = %promotion.kind
        ),
        err
    )]
    async fn create_promotion(
        &self,
        promotion: PromotionData,
    ) -> Result<Promotion, PromotionsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_promotion(&mut tx, &promotion).await?;

        tx.commit().await?;

        Span::current().record("promotion_id", tracing::field::display(created.id));

        info!(promotion_id = %created.id, name = %created.name, "created promotion");

        Ok(created)
    }

    #[tracing::instrument(
        name = "promotions.service.update_promotion",
        skip(self, update),
        fields(promotion_id = %promotion, status = update.status),
        err
    )]
    async fn update_promotion(
        &self,
        promotion: PromotionId,
        update: PromotionData,
    ) -> Result<Promotion, PromotionsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_promotion(&mut tx, promotion, &update)
            .await?;

        tx.commit().await?;

        info!(promotion_id = %promotion, "updated promotion");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "promotions.service.delete_promotion",
        skip(self),
        fields(promotion_id = %promotion, deleted = tracing::field::Empty),
        err
    )]
    async fn delete_promotion(&self, promotion: PromotionId) -> Result<(), PromotionsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_promotion(&mut tx, promotion).await?;

        tx.commit().await?;

        Span::current().record("deleted", rows_affected > 0);

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PromotionsService: Send + Sync {
    /// Retrieves every promotion, in no particular order.
    async fn list_promotions(&self) -> Result<Vec<Promotion>, PromotionsServiceError>;

    /// Retrieves a single promotion, or `None` when no promotion has that id.
    async fn find_promotion(
        &self,
        promotion: PromotionId,
    ) -> Result<Option<Promotion>, PromotionsServiceError>;

    /// Retrieves the promotions whose status matches.
    async fn find_by_status(&self, status: bool) -> Result<Vec<Promotion>, PromotionsServiceError>;

    /// Retrieves the promotions with exactly this name.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Promotion>, PromotionsServiceError>;

    /// Stores a new promotion under a freshly assigned id.
    async fn create_promotion(
        &self,
        promotion: PromotionData,
    ) -> Result<Promotion, PromotionsServiceError>;

    /// Overwrites the promotion with the given id and refreshes its update date.
    async fn update_promotion(
        &self,
        promotion: PromotionId,
        update: PromotionData,
    ) -> Result<Promotion, PromotionsServiceError>;

    /// Deletes the promotion with the given id. Deleting a missing promotion succeeds.
    async fn delete_promotion(&self, promotion: PromotionId) -> Result<(), PromotionsServiceError>;
}

#[cfg(all(test, feature = "integration-tests"))]
mod tests {
    use jiff::{Timestamp, tz::TimeZone};
    use testresult::TestResult;

    use crate::{
        domain::promotions::models::PromotionType,
        test::{TestContext, sample_promotion},
    };

    use super::*;

    #[tokio::test]
    async fn create_promotion_assigns_id_and_dates() -> TestResult {
        let ctx = TestContext::new().await;
        let today = Timestamp::now().to_zoned(TimeZone::UTC).date();

        let data = sample_promotion("Sale", true);

        let promotion = ctx.promotions.create_promotion(data.clone()).await?;

        assert!(promotion.id.into_i64() > 0, "store should assign an id");
        assert_eq!(PromotionData::from(promotion.clone()), data);
        assert_eq!(promotion.created_at, today);
        assert_eq!(promotion.last_updated_at, today);

        Ok(())
    }

    #[tokio::test]
    async fn create_promotion_assigns_distinct_ids() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx
            .promotions
            .create_promotion(sample_promotion("First", true))
            .await?;

        let second = ctx
            .promotions
            .create_promotion(sample_promotion("Second", true))
            .await?;

        assert_ne!(first.id, second.id);

        Ok(())
    }

    #[tokio::test]
    async fn find_promotion_returns_created_promotion() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .promotions
            .create_promotion(sample_promotion("Sale", true))
            .await?;

        let found = ctx.promotions.find_promotion(created.id).await?;

        assert_eq!(found, Some(created));

        Ok(())
    }

    #[tokio::test]
    async fn find_promotion_unknown_id_returns_none() -> TestResult {
        let ctx = TestContext::new().await;

        let found = ctx
            .promotions
            .find_promotion(PromotionId::from_i64(404))
            .await?;

        assert!(found.is_none(), "expected no promotion, got {found:?}");

        Ok(())
    }

    #[tokio::test]
    async fn list_promotions_returns_created_promotions() -> TestResult {
        let ctx = TestContext::new().await;

        let a = ctx
            .promotions
            .create_promotion(sample_promotion("A", true))
            .await?;

        let b = ctx
            .promotions
            .create_promotion(sample_promotion("B", false))
            .await?;

        let ids: Vec<PromotionId> = ctx
            .promotions
            .list_promotions()
            .await?
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids.len(), 2, "expected two promotions");
        assert!(ids.contains(&a.id), "promotion A should be in the list");
        assert!(ids.contains(&b.id), "promotion B should be in the list");

        Ok(())
    }

    #[tokio::test]
    async fn list_promotions_empty_when_none_created() -> TestResult {
        let ctx = TestContext::new().await;

        assert!(ctx.promotions.list_promotions().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn find_by_status_partitions_promotions() -> TestResult {
        let ctx = TestContext::new().await;

        for (index, status) in [true, true, true, false, false].into_iter().enumerate() {
            ctx.promotions
                .create_promotion(sample_promotion(&format!("Promotion {index}"), status))
                .await?;
        }

        let active = ctx.promotions.find_by_status(true).await?;
        let inactive = ctx.promotions.find_by_status(false).await?;
        let all = ctx.promotions.list_promotions().await?;

        assert_eq!(active.len(), 3, "expected three active promotions");
        assert_eq!(inactive.len(), 2, "expected two inactive promotions");
        assert!(active.iter().all(|p| p.status), "all should be active");
        assert!(inactive.iter().all(|p| !p.status), "all should be inactive");
        assert_eq!(active.len() + inactive.len(), all.len());

        Ok(())
    }

    #[tokio::test]
    async fn find_by_name_matches_exact_name() -> TestResult {
        let ctx = TestContext::new().await;

        let sale = ctx
            .promotions
            .create_promotion(sample_promotion("Sale", true))
            .await?;

        ctx.promotions
            .create_promotion(sample_promotion("Clearance", true))
            .await?;

        let found = ctx.promotions.find_by_name("Sale").await?;

        assert_eq!(found, vec![sale]);

        Ok(())
    }

    #[tokio::test]
    async fn update_promotion_overwrites_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .promotions
            .create_promotion(sample_promotion("Sale", true))
            .await?;

        let mut update = PromotionData::from(created.clone());

        update.description = "Bigger sale".to_owned();
        update.kind = PromotionType::PercentDiscount;
        update.promotion_percent = Some(25.0);

        let updated = ctx
            .promotions
            .update_promotion(created.id, update.clone())
            .await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(PromotionData::from(updated.clone()), update);
        assert_eq!(
            ctx.promotions.find_promotion(created.id).await?,
            Some(updated)
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_promotion_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .promotions
            .update_promotion(PromotionId::from_i64(404), sample_promotion("Sale", true))
            .await;

        assert!(
            matches!(result, Err(PromotionsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_promotion_removes_it() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .promotions
            .create_promotion(sample_promotion("Sale", true))
            .await?;

        ctx.promotions.delete_promotion(created.id).await?;

        assert!(ctx.promotions.find_promotion(created.id).await?.is_none());
        assert!(ctx.promotions.list_promotions().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn delete_promotion_unknown_id_succeeds() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.promotions
            .delete_promotion(PromotionId::from_i64(404))
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn overlong_name_is_rejected_by_store() {
        let ctx = TestContext::new().await;

        let result = ctx
            .promotions
            .create_promotion(sample_promotion(&"x".repeat(64), true))
            .await;

        assert!(result.is_err(), "store should reject a 64 character name");
    }
}
