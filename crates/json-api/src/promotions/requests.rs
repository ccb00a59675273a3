//! Promotion Requests

use jiff::civil::Date;
use salvo::oapi::ToSchema;
use serde::Deserialize;

use promotions_app::domain::promotions::{
    data::{PromotionData, ValidationError, calendar_date, optional_calendar_date},
    models::PromotionType,
};

/// Body accepted by the create and update endpoints.
///
/// `id`, `created_at` and `last_updated_at` may be echoed back from a response;
/// the id is ignored and the timestamps are only checked for shape.
#[derive(Debug, Clone, Deserialize, ToSchema, PartialEq)]
pub(crate) struct PromotionRequest {
    /// Display name, at most 63 characters
    pub name: String,

    /// One of `ABS_DISCOUNT`, `PERCENT_DISCOUNT`, `DELIVERY_DISCOUNT`, `GIFT_CARDS`, `UNKNOWN`
    #[serde(rename = "type")]
    #[salvo(schema(value_type = String))]
    pub kind: PromotionType,

    /// Free text description, at most 63 characters
    pub description: String,

    /// Absolute discount amount
    #[serde(default)]
    pub promotion_value: Option<i64>,

    /// Percentage discount
    #[serde(default)]
    pub promotion_percent: Option<f64>,

    /// Whether the promotion is active
    pub status: bool,

    /// Last day the promotion applies (ISO-8601 date)
    #[serde(deserialize_with = "calendar_date")]
    #[salvo(schema(value_type = String))]
    pub expiry: Date,

    /// Ignored; assigned by the store
    #[serde(
        rename = "created_at",
        default,
        deserialize_with = "optional_calendar_date"
    )]
    #[salvo(schema(value_type = Option<String>))]
    pub _created_at: Option<Date>,

    /// Ignored; assigned by the store
    #[serde(
        rename = "last_updated_at",
        default,
        deserialize_with = "optional_calendar_date"
    )]
    #[salvo(schema(value_type = Option<String>))]
    pub _last_updated_at: Option<Date>,
}

impl TryFrom<PromotionRequest> for PromotionData {
    type Error = ValidationError;

    fn try_from(request: PromotionRequest) -> Result<Self, Self::Error> {
        PromotionData {
            name: request.name,
            kind: request.kind,
            description: request.description,
            promotion_value: request.promotion_value,
            promotion_percent: request.promotion_percent,
            status: request.status,
            expiry: request.expiry,
        }
        .validated()
    }
}
