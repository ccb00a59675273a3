//! Request payload helpers shared by the promotion handlers.

use salvo::{
    http::{StatusError, header::HOST},
    prelude::Request,
};
use promotions_app::domain::promotions::{data::PromotionData, models::PromotionId};

use crate::{extensions::*, promotions::requests::PromotionRequest};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Reject requests whose `Content-Type` is not `application/json`.
pub(crate) fn ensure_json(req: &Request) -> Result<(), StatusError> {
    let is_json = req
        .content_type()
        .is_some_and(|mime| mime.essence_str() == JSON_MEDIA_TYPE);

    if is_json {
        Ok(())
    } else {
        Err(StatusError::unsupported_media_type()
            .brief(format!("Content-Type must be {JSON_MEDIA_TYPE}")))
    }
}

/// Decode the body as a [`PromotionRequest`] and validate it.
///
/// Read by hand rather than through `JsonBody` so that callers decide when the
/// body is looked at; `PUT` answers 404 for unknown ids before judging the body.
pub(crate) async fn promotion_data(req: &mut Request) -> Result<PromotionData, StatusError> {
    let body = req.payload().await.or_400()?;

    let request = serde_json::from_slice::<PromotionRequest>(body).map_err(|error| {
        StatusError::bad_request().brief(format!("Invalid Promotion: {error}"))
    })?;

    PromotionData::try_from(request).or_400()
}

/// Absolute URL of a promotion, built from the request's scheme and host.
pub(crate) fn location(req: &Request, promotion: PromotionId) -> String {
    let host = req
        .uri()
        .authority()
        .map(ToString::to_string)
        .or_else(|| req.header::<String>(HOST))
        .unwrap_or_else(|| "localhost".to_owned());

    format!("{}://{host}/api/promotions/{promotion}", req.scheme())
}
