//! App Router

use salvo::Router;

use crate::{healthcheck, index, promotions};

pub(crate) fn app_router() -> Router {
    Router::new()
        .get(index::handler)
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api/promotions")
                .get(promotions::index::handler)
                .post(promotions::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(promotions::get::handler)
                        .put(promotions::update::handler)
                        .delete(promotions::delete::handler)
                        .push(
                            Router::with_path("activate")
                                .put(promotions::status::activate)
                                .delete(promotions::status::deactivate),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use promotions_app::{context::AppContext, domain::promotions::MockPromotionsService};

    use crate::{errors, healthcheck::HealthResponse, state::State};

    use super::*;

    fn service(promotions: MockPromotionsService) -> Service {
        let app = AppContext::new(Arc::new(promotions));

        Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(app)))
                .push(app_router()),
        )
        .catcher(errors::catcher())
    }

    #[tokio::test]
    async fn health_is_routed() -> TestResult {
        let body: HealthResponse = TestClient::get("http://example.com/health")
            .send(&service(MockPromotionsService::new()))
            .await
            .take_json()
            .await?;

        assert_eq!(body.message, "Healthy");

        Ok(())
    }

    #[tokio::test]
    async fn landing_page_is_routed() -> TestResult {
        let mut res = TestClient::get("http://example.com/")
            .send(&service(MockPromotionsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(
            res.take_string().await?.contains("<html"),
            "expected the landing page"
        );

        Ok(())
    }

    #[tokio::test]
    async fn activate_routes_to_status_handlers() {
        let mut mock = MockPromotionsService::new();

        mock.expect_find_promotion()
            .times(2)
            .returning(|_| Ok(None));

        mock.expect_update_promotion().never();
        mock.expect_delete_promotion().never();

        let service = service(mock);

        for res in [
            TestClient::put("http://example.com/api/promotions/9/activate")
                .send(&service)
                .await,
            TestClient::delete("http://example.com/api/promotions/9/activate")
                .send(&service)
                .await,
        ] {
            assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        }
    }
}
