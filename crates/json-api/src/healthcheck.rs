//! Promotions JSON API Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// HTTP status code, always 200
    pub status: u16,

    /// Service status
    pub message: String,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: StatusCode::OK.as_u16(),
        message: "Healthy".to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_healthcheck() -> TestResult {
        let router = Router::new()
            .push(Router::with_path("health").get(handler))
            .push(Router::with_path("healthcheck").get(handler));

        let service = Service::new(router);

        for path in ["health", "healthcheck"] {
            let response: HealthResponse = TestClient::get(format!("http://example.com/{path}"))
                .send(&service)
                .await
                .take_json()
                .await?;

            assert_eq!(response.status, 200);
            assert_eq!(response.message, "Healthy");
        }

        Ok(())
    }
}
