//! Get Promotion Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use promotions_app::domain::promotions::models::PromotionId;

use crate::{
    extensions::*,
    promotions::{
        errors::{into_status_error, not_found},
        models::PromotionResponse,
    },
    state::State,
};

/// Get Promotion Handler
///
/// Returns a single promotion.
#[endpoint(
    tags("promotions"),
    summary = "Get Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion found"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<PromotionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = PromotionId::from_i64(id.into_inner());

    let promotion = state
        .app
        .promotions
        .find_promotion(id)
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(promotion.into()))
}
