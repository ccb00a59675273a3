//! Database-backed test support.

mod context;

use jiff::civil::date;

use crate::domain::promotions::{data::PromotionData, models::PromotionType};

pub(crate) use context::TestContext;

/// A valid absolute discount promotion with the given name and status.
pub(crate) fn sample_promotion(name: &str, status: bool) -> PromotionData {
    PromotionData {
        name: name.to_owned(),
        kind: PromotionType::AbsDiscount,
        description: format!("{name} on products"),
        promotion_value: Some(1000),
        promotion_percent: Some(0.0),
        status,
        expiry: date(2030, 1, 1),
    }
}
