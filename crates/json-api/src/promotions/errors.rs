//! Promotion Errors

use salvo::http::StatusError;
use tracing::error;

use promotions_app::domain::promotions::{PromotionsServiceError, models::PromotionId};

/// 404 naming the promotion that could not be found.
pub(crate) fn not_found(promotion: PromotionId) -> StatusError {
    StatusError::not_found().brief(format!("Promotion with id '{promotion}' was not found."))
}

pub(crate) fn into_status_error(error: PromotionsServiceError) -> StatusError {
    match error {
        PromotionsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Promotion already exists")
        }
        PromotionsServiceError::MissingRequiredData | PromotionsServiceError::InvalidData => {
            StatusError::bad_request()
                .brief("Invalid Promotion: body of request contained bad or no data")
        }
        PromotionsServiceError::NotFound => StatusError::not_found(),
        PromotionsServiceError::Sql(source) => {
            error!("failed to process promotion: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Like [`into_status_error`], but a missing promotion reports its id.
pub(crate) fn for_promotion(
    promotion: PromotionId,
) -> impl FnOnce(PromotionsServiceError) -> StatusError {
    move |error| match error {
        PromotionsServiceError::NotFound => not_found(promotion),
        other => into_status_error(other),
    }
}
