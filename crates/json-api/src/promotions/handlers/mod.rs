//! Promotion Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod status;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use serde_json::{Value, json};

    use promotions_app::domain::promotions::models::{Promotion, PromotionId, PromotionType};

    pub(super) fn make_promotion(id: i64, status: bool) -> Promotion {
        Promotion {
            id: PromotionId::from_i64(id),
            name: format!("Promotion {id}"),
            kind: PromotionType::AbsDiscount,
            description: "Sale on Products".to_owned(),
            promotion_value: Some(1000),
            promotion_percent: None,
            status,
            expiry: date(2030, 1, 1),
            created_at: date(2025, 1, 1),
            last_updated_at: date(2025, 1, 1),
        }
    }

    pub(super) fn sale_json() -> Value {
        json!({
            "name": "Sale",
            "type": "PERCENT_DISCOUNT",
            "description": "Ten percent off",
            "promotion_percent": 10.0,
            "status": true,
            "expiry": "2030-01-01"
        })
    }
}
