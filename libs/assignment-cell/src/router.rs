use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tokio::time::Duration;

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::models::StaffingSummary;
use crate::services::{DepartmentService, PollingCache, PreferenceService};

/// Shared state for the assignment endpoints: the process config plus the
/// summary polling cache, which must outlive individual requests.
pub struct AssignmentState {
    pub config: Arc<AppConfig>,
    pub summary_cache: Arc<PollingCache<StaffingSummary>>,
}

pub fn assignment_routes(config: Arc<AppConfig>) -> Router {
    let interval = Duration::from_secs(config.assignment_refresh_secs);
    let fetch_config = config.clone();
    let summary_cache = PollingCache::spawn(interval, move || {
        let config = fetch_config.clone();
        async move {
            let departments = DepartmentService::new(&config);
            let preferences = PreferenceService::new(&config);
            Ok(departments.summary(&preferences).await?)
        }
    });

    let state = Arc::new(AssignmentState {
        config: config.clone(),
        summary_cache,
    });

    Router::new()
        .route(
            "/nurse-department-preferences",
            get(handlers::list_preferences).post(handlers::save_preference),
        )
        .route(
            "/nurse-department-preferences/seed",
            post(handlers::seed_nurses),
        )
        .route(
            "/nurse-department-preferences/{nurse_id}",
            delete(handlers::delete_preference),
        )
        .route(
            "/nurse-department-preferences/{nurse_id}/availability",
            patch(handlers::toggle_availability),
        )
        .route(
            "/department-nurse-assignments",
            get(handlers::list_assignments).post(handlers::save_assignment),
        )
        .route(
            "/department-nurse-assignments/initialize",
            post(handlers::initialize_departments),
        )
        .route(
            "/department-nurse-assignments/summary",
            get(handlers::staffing_summary),
        )
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(state)
}
