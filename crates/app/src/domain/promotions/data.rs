//! Promotions Data
//!
//! Caller-supplied promotion fields and the rules they must satisfy.

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, de::Error as _};
use thiserror::Error;

use crate::domain::promotions::models::{Promotion, PromotionType};

/// Longest name or description the store accepts, in characters.
pub const MAX_TEXT_LENGTH: usize = 63;

/// Format every date field must match exactly.
const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons promotion data is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A text field is longer than [`MAX_TEXT_LENGTH`].
    #[error("Invalid Promotion: {field} must be at most 63 characters")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Caller-supplied promotion fields.
///
/// Carries no id and no timestamps; those are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionData {
    pub name: String,
    pub kind: PromotionType,
    pub description: String,
    pub promotion_value: Option<i64>,
    pub promotion_percent: Option<f64>,
    pub status: bool,
    pub expiry: Date,
}

impl PromotionData {
    /// Check the limits the store enforces on text fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] naming the first over-long field.
    pub fn validated(self) -> Result<Self, ValidationError> {
        for (field, value) in [("name", &self.name), ("description", &self.description)] {
            if value.chars().count() > MAX_TEXT_LENGTH {
                return Err(ValidationError::TooLong { field });
            }
        }

        Ok(self)
    }
}

impl From<Promotion> for PromotionData {
    fn from(promotion: Promotion) -> Self {
        Self {
            name: promotion.name,
            kind: promotion.kind,
            description: promotion.description,
            promotion_value: promotion.promotion_value,
            promotion_percent: promotion.promotion_percent,
            status: promotion.status,
            expiry: promotion.expiry,
        }
    }
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`), rejecting datetimes.
///
/// # Errors
///
/// Returns an error when the value is not exactly a valid calendar date.
pub fn parse_calendar_date(value: &str) -> Result<Date, jiff::Error> {
    Date::strptime(CALENDAR_DATE_FORMAT, value)
}

/// Serde adapter for [`parse_calendar_date`], for use with `deserialize_with`.
///
/// # Errors
///
/// Fails when the value is not a string holding a calendar date.
pub fn calendar_date<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    parse_calendar_date(&value).map_err(|_parse_error| {
        D::Error::custom(format!("\"{value}\" is not a calendar date (YYYY-MM-DD)"))
    })
}

/// Like [`calendar_date`], for fields that may be absent or `null`.
///
/// # Errors
///
/// Fails when a present value is not a string holding a calendar date.
pub fn optional_calendar_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|value| {
            parse_calendar_date(&value).map_err(|_parse_error| {
                D::Error::custom(format!("\"{value}\" is not a calendar date (YYYY-MM-DD)"))
            })
        })
        .transpose()
}
