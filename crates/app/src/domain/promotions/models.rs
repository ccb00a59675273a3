//! Promotion Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::TypedId;

/// Promotion Id
pub type PromotionId = TypedId<Promotion>;

/// The kind of discount a promotion grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromotionType {
    AbsDiscount,
    PercentDiscount,
    DeliveryDiscount,
    GiftCards,
    Unknown,
}

impl PromotionType {
    /// Every promotion type, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::AbsDiscount,
        Self::PercentDiscount,
        Self::DeliveryDiscount,
        Self::GiftCards,
        Self::Unknown,
    ];

    /// Wire and storage name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AbsDiscount => "ABS_DISCOUNT",
            Self::PercentDiscount => "PERCENT_DISCOUNT",
            Self::DeliveryDiscount => "DELIVERY_DISCOUNT",
            Self::GiftCards => "GIFT_CARDS",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl Display for PromotionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Raised when a string does not name a [`PromotionType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown promotion type \"{0}\"")]
pub struct UnknownPromotionType(pub String);

impl FromStr for PromotionType {
    type Err = UnknownPromotionType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownPromotionType(value.to_owned()))
    }
}

/// Promotion Model
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    pub id: PromotionId,
    pub name: String,
    pub kind: PromotionType,
    pub description: String,
    pub promotion_value: Option<i64>,
    pub promotion_percent: Option<f64>,
    pub status: bool,
    pub expiry: Date,
    pub created_at: Date,
    pub last_updated_at: Date,
}
