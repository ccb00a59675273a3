//! Promotion Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    promotions::{errors::into_status_error, models::PromotionResponse},
    state::State,
};

/// Promotion Index Handler
///
/// Lists promotions. `status` takes precedence over `name` when both are given.
#[endpoint(
    tags("promotions"),
    summary = "List Promotions",
    responses(
        (status_code = StatusCode::OK, description = "Promotions"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid status filter"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    status: QueryParam<String, false>,
    name: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<PromotionResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = status
        .into_inner()
        .filter(|value| !value.is_empty())
        .map(|value| parse_status(&value))
        .transpose()?;

    let name = name.into_inner().filter(|value| !value.is_empty());

    let promotions = match (status, name) {
        (Some(status), _) => state.app.promotions.find_by_status(status).await,
        (None, Some(name)) => state.app.promotions.find_by_name(&name).await,
        (None, None) => state.app.promotions.list_promotions().await,
    }
    .map_err(into_status_error)?;

    Ok(Json(promotions.into_iter().map(Into::into).collect()))
}

fn parse_status(value: &str) -> Result<bool, StatusError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(StatusError::bad_request().brief(format!(
            "Invalid status filter \"{value}\": expected true or false"
        )))
    }
}
