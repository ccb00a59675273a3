//! Promotions Repository

use jiff_sqlx::Date as SqlxDate;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::promotions::{
    data::PromotionData,
    models::{Promotion, PromotionId, PromotionType},
};

const LIST_PROMOTIONS_SQL: &str = include_str!("sql/list_promotions.sql");
const FIND_PROMOTION_SQL: &str = include_str!("sql/find_promotion.sql");
const FIND_PROMOTIONS_BY_STATUS_SQL: &str = include_str!("sql/find_promotions_by_status.sql");
const FIND_PROMOTIONS_BY_NAME_SQL: &str = include_str!("sql/find_promotions_by_name.sql");
const CREATE_PROMOTION_SQL: &str = include_str!("sql/create_promotion.sql");
const UPDATE_PROMOTION_SQL: &str = include_str!("sql/update_promotion.sql");
const DELETE_PROMOTION_SQL: &str = include_str!("sql/delete_promotion.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPromotionsRepository;

impl PgPromotionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_promotions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Promotion>, sqlx::Error> {
        query_as::<Postgres, Promotion>(LIST_PROMOTIONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionId,
    ) -> Result<Option<Promotion>, sqlx::Error> {
        query_as::<Postgres, Promotion>(FIND_PROMOTION_SQL)
            .bind(promotion.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        status: bool,
    ) -> Result<Vec<Promotion>, sqlx::Error> {
        query_as::<Postgres, Promotion>(FIND_PROMOTIONS_BY_STATUS_SQL)
            .bind(status)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Vec<Promotion>, sqlx::Error> {
        query_as::<Postgres, Promotion>(FIND_PROMOTIONS_BY_NAME_SQL)
            .bind(name)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: &PromotionData,
    ) -> Result<Promotion, sqlx::Error> {
        query_as::<Postgres, Promotion>(CREATE_PROMOTION_SQL)
            .bind(&promotion.name)
            .bind(promotion.kind.as_str())
            .bind(&promotion.description)
            .bind(promotion.promotion_value)
            .bind(promotion.promotion_percent)
            .bind(promotion.status)
            .bind(SqlxDate::from(promotion.expiry))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionId,
        update: &PromotionData,
    ) -> Result<Promotion, sqlx::Error> {
        query_as::<Postgres, Promotion>(UPDATE_PROMOTION_SQL)
            .bind(promotion.into_i64())
            .bind(&update.name)
            .bind(update.kind.as_str())
            .bind(&update.description)
            .bind(update.promotion_value)
            .bind(update.promotion_percent)
            .bind(update.status)
            .bind(SqlxDate::from(update.expiry))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PROMOTION_SQL)
            .bind(promotion.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Promotion {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let kind: String = row.try_get("type")?;

        let kind = kind
            .parse::<PromotionType>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "type".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: PromotionId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            kind,
            description: row.try_get("description")?,
            promotion_value: row.try_get("promotion_value")?,
            promotion_percent: row.try_get("promotion_percent")?,
            status: row.try_get("status")?,
            expiry: row.try_get::<SqlxDate, _>("expiry")?.to_jiff(),
            created_at: row.try_get::<SqlxDate, _>("created_at")?.to_jiff(),
            last_updated_at: row.try_get::<SqlxDate, _>("last_updated_at")?.to_jiff(),
        })
    }
}
