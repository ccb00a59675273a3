//! Update Promotion Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use promotions_app::domain::promotions::models::PromotionId;

use crate::{
    extensions::*,
    promotions::{
        errors::{for_promotion, into_status_error, not_found},
        models::PromotionResponse,
        payload::{ensure_json, promotion_data},
        requests::PromotionRequest,
    },
    state::State,
};

/// Update Promotion Handler
///
/// Replaces every caller-supplied field of an existing promotion.
#[endpoint(
    tags("promotions"),
    request_body = PromotionRequest,
    summary = "Update Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid promotion payload"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Body is not JSON"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PromotionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = PromotionId::from_i64(id.into_inner());

    ensure_json(req)?;

    state
        .app
        .promotions
        .find_promotion(id)
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| not_found(id))?;

    let data = promotion_data(req).await?;

    let promotion = state
        .app
        .promotions
        .update_promotion(id, data)
        .await
        .map_err(for_promotion(id))?;

    Ok(Json(promotion.into()))
}
