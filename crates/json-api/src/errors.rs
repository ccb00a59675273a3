//! JSON error responses.

use salvo::{
    catcher::Catcher,
    http::ResBody,
    oapi::ToSchema,
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// HTTP status code
    pub status: u16,

    /// Canonical reason phrase of the status code
    pub error: String,

    /// What went wrong
    pub message: String,
}

/// Rewrite an error response into an [`ErrorResponse`] body.
#[handler]
pub(crate) async fn render_json_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let Some(code) = res
        .status_code
        .filter(|code| code.is_client_error() || code.is_server_error())
    else {
        return;
    };

    let error = code.canonical_reason().unwrap_or("Error").to_owned();

    let message = match res.take_body() {
        ResBody::Error(status_error) => status_error.brief,
        _ => error.clone(),
    };

    res.render(Json(ErrorResponse {
        status: code.as_u16(),
        error,
        message,
    }));

    ctrl.skip_rest();
}

/// Catcher that answers every error in JSON.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_json_error)
}
