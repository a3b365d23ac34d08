//! Framework CRUD and search routes, nested under `/frameworks`.
//! `/search` is a static segment and takes precedence over `/:id`.

use crate::handlers::framework::{create, delete as delete_handler, list, read, search, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const FRAMEWORKS_PATH: &str = "/frameworks";

pub fn framework_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/search", get(search))
        .route("/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
