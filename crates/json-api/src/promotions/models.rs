//! Promotion Response Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use promotions_app::domain::promotions::models::Promotion;

/// A stored promotion as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionResponse {
    /// Store-assigned identifier
    pub id: i64,

    /// Display name, at most 63 characters
    pub name: String,

    /// One of `ABS_DISCOUNT`, `PERCENT_DISCOUNT`, `DELIVERY_DISCOUNT`, `GIFT_CARDS`, `UNKNOWN`
    #[serde(rename = "type")]
    pub kind: String,

    /// Free text description, at most 63 characters
    pub description: String,

    /// Absolute discount amount
    pub promotion_value: Option<i64>,

    /// Percentage discount
    pub promotion_percent: Option<f64>,

    /// Whether the promotion is active
    pub status: bool,

    /// Last day the promotion applies (ISO-8601 date)
    pub expiry: String,

    /// Date the promotion was created (ISO-8601 date)
    pub created_at: String,

    /// Date the promotion was last changed (ISO-8601 date)
    pub last_updated_at: String,
}

impl From<Promotion> for PromotionResponse {
    fn from(promotion: Promotion) -> Self {
        Self {
            id: promotion.id.into_i64(),
            name: promotion.name,
            kind: promotion.kind.to_string(),
            description: promotion.description,
            promotion_value: promotion.promotion_value,
            promotion_percent: promotion.promotion_percent,
            status: promotion.status,
            expiry: promotion.expiry.to_string(),
            created_at: promotion.created_at.to_string(),
            last_updated_at: promotion.last_updated_at.to_string(),
        }
    }
}
