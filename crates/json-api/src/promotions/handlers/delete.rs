//! Delete Promotion Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use promotions_app::domain::promotions::models::PromotionId;

use crate::{extensions::*, promotions::errors::into_status_error, state::State};

/// Delete Promotion Handler
///
/// Deleting a promotion that does not exist also succeeds.
#[endpoint(
    tags("promotions"),
    summary = "Delete Promotion",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Promotion deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .promotions
        .delete_promotion(PromotionId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use promotions_app::domain::promotions::MockPromotionsService;

    use crate::test_helpers::promotions_service;

    use super::*;

    fn make_service(promotions: MockPromotionsService) -> Service {
        promotions_service(
            promotions,
            Router::with_path("api/promotions/{id}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_returns_204_with_empty_body() -> TestResult {
        let mut mock = MockPromotionsService::new();

        mock.expect_delete_promotion()
            .once()
            .withf(|id| *id == PromotionId::from_i64(5))
            .return_once(|_| Ok(()));

        mock.expect_find_promotion().never();

        let mut res = TestClient::delete("http://example.com/api/promotions/5")
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        assert_eq!(res.take_string().await?, "");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_still_returns_204() {
        let mut mock = MockPromotionsService::new();

        mock.expect_delete_promotion()
            .once()
            .withf(|id| *id == PromotionId::from_i64(404))
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/api/promotions/404")
            .send(&make_service(mock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
    }
}
