use std::sync::Arc;

use axum::{routing::get, Router};

use assignment_cell::router::assignment_routes;
use navigation_cell::router::navigation_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Hospital staffing API is running!" }))
        .nest("/navigation", navigation_routes(state.clone()))
        // Assignment endpoints live at the root, matching the paths the
        // screens call directly.
        .merge(assignment_routes(state))
}
