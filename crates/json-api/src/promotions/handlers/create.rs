//! Create Promotion Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    extensions::*,
    promotions::{
        errors::into_status_error,
        models::PromotionResponse,
        payload::{ensure_json, location, promotion_data},
        requests::PromotionRequest,
    },
    state::State,
};

/// Create Promotion Handler
///
/// Stores a new promotion and answers with its absolute URL in `Location`.
#[endpoint(
    tags("promotions"),
    request_body = PromotionRequest,
    summary = "Create Promotion",
    responses(
        (status_code = StatusCode::CREATED, description = "Promotion created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid promotion payload"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Body is not JSON"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PromotionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    ensure_json(req)?;

    let data = promotion_data(req).await?;

    let promotion = state
        .app
        .promotions
        .create_promotion(data)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, location(req, promotion.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(promotion.into()))
}
