//! Router assembly: operational routes plus the framework API.

mod common;
mod framework;

pub use common::common_routes;
pub use framework::{framework_routes, FRAMEWORKS_PATH};

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router with request tracing and a request body limit.
pub fn app(state: AppState, request_body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest(FRAMEWORKS_PATH, framework_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(request_body_limit)),
        )
}
