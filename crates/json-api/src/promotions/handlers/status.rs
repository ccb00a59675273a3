//! Activate and Deactivate Promotion Handlers

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use promotions_app::domain::promotions::{data::PromotionData, models::PromotionId};

use crate::{
    extensions::*,
    promotions::{
        errors::{for_promotion, into_status_error, not_found},
        models::PromotionResponse,
    },
    state::State,
};

/// Activate Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Activate Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion activated"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn activate(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<PromotionResponse>, StatusError> {
    set_status(depot, PromotionId::from_i64(id.into_inner()), true).await
}

/// Deactivate Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Deactivate Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion deactivated"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn deactivate(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<PromotionResponse>, StatusError> {
    set_status(depot, PromotionId::from_i64(id.into_inner()), false).await
}

async fn set_status(
    depot: &Depot,
    id: PromotionId,
    status: bool,
) -> Result<Json<PromotionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let promotion = state
        .app
        .promotions
        .find_promotion(id)
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| not_found(id))?;

    let data = PromotionData {
        status,
        ..PromotionData::from(promotion)
    };

    let promotion = state
        .app
        .promotions
        .update_promotion(id, data)
        .await
        .map_err(for_promotion(id))?;

    Ok(Json(promotion.into()))
}
