//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use promotions_app::{context::AppContext, domain::promotions::MockPromotionsService};

use crate::{errors, state::State};

/// Serve `route` against a mocked promotions service, with JSON error bodies.
pub(crate) fn promotions_service(promotions: MockPromotionsService, route: Router) -> Service {
    let app = AppContext::new(Arc::new(promotions));

    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
    .catcher(errors::catcher())
}
