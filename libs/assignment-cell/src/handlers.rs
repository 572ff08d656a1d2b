use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    Json,
};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};
use serde_json::{json, Value};

use shared_models::auth::User;
use shared_models::error::AppError;
use shared_models::role::{Capability, Role};

use crate::models::{SaveAssignmentRequest, SavePreferenceRequest, ToggleAvailabilityRequest};
use crate::router::AssignmentState;
use crate::services::{DepartmentService, PreferenceService};

fn require_role(user: &User) -> Result<Role, AppError> {
    user.typed_role()
        .ok_or_else(|| AppError::Forbidden("Role not recognized".to_string()))
}

/// Admins may act on any nurse's record; a nurse only on their own.
fn authorize_preference_mutation(user: &User, nurse_id: &str) -> Result<(), AppError> {
    let role = require_role(user)?;

    if !role.can(Capability::ManagePreferences) {
        return Err(AppError::Forbidden(
            "Not authorized to manage nurse preferences".to_string(),
        ));
    }
    if !role.is_admin() && user.id != nurse_id {
        return Err(AppError::Forbidden(
            "Nurses may only manage their own preference record".to_string(),
        ));
    }

    Ok(())
}

fn authorize(user: &User, capability: Capability, denied: &str) -> Result<(), AppError> {
    let role = require_role(user)?;
    if !role.can(capability) {
        return Err(AppError::Forbidden(denied.to_string()));
    }
    Ok(())
}

// ==============================================================================
// NURSE DEPARTMENT PREFERENCES
// ==============================================================================

#[axum::debug_handler]
pub async fn list_preferences(
    State(state): State<Arc<AssignmentState>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Value>, AppError> {
    let service = PreferenceService::new(&state.config);
    let preferences = service.list(Some(auth.token())).await?;

    Ok(Json(json!({
        "preferences": preferences,
        "total": preferences.len()
    })))
}

#[axum::debug_handler]
pub async fn save_preference(
    State(state): State<Arc<AssignmentState>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Extension(user): Extension<User>,
    Json(request): Json<SavePreferenceRequest>,
) -> Result<Json<Value>, AppError> {
    authorize_preference_mutation(&user, &request.nurse_id)?;

    let service = PreferenceService::new(&state.config);
    let saved = service.save(request, auth.token()).await?;

    state.summary_cache.invalidate();
    Ok(Json(json!(saved)))
}

#[axum::debug_handler]
pub async fn delete_preference(
    State(state): State<Arc<AssignmentState>>,
    Path(nurse_id): Path<String>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    authorize_preference_mutation(&user, &nurse_id)?;

    let service = PreferenceService::new(&state.config);
    service.delete(&nurse_id, auth.token()).await?;

    state.summary_cache.invalidate();
    Ok(Json(json!({ "success": true })))
}

#[axum::debug_handler]
pub async fn toggle_availability(
    State(state): State<Arc<AssignmentState>>,
    Path(nurse_id): Path<String>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Extension(user): Extension<User>,
    Json(request): Json<ToggleAvailabilityRequest>,
) -> Result<Json<Value>, AppError> {
    authorize_preference_mutation(&user, &nurse_id)?;

    let service = PreferenceService::new(&state.config);
    let updated = service
        .toggle_availability(&nurse_id, request.is_available, auth.token())
        .await?;

    state.summary_cache.invalidate();
    Ok(Json(json!(updated)))
}

#[axum::debug_handler]
pub async fn seed_nurses(
    State(state): State<Arc<AssignmentState>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    authorize(
        &user,
        Capability::SeedData,
        "Only administrators can seed the nurse roster",
    )?;

    let service = PreferenceService::new(&state.config);
    let outcome = service.seed(auth.token()).await?;

    state.summary_cache.invalidate();
    Ok(Json(json!(outcome)))
}

// ==============================================================================
// DEPARTMENT NURSE ASSIGNMENTS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_assignments(
    State(state): State<Arc<AssignmentState>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Value>, AppError> {
    let service = DepartmentService::new(&state.config);
    let assignments = service.list(Some(auth.token())).await?;

    Ok(Json(json!({
        "assignments": assignments,
        "total": assignments.len()
    })))
}

#[axum::debug_handler]
pub async fn save_assignment(
    State(state): State<Arc<AssignmentState>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Extension(user): Extension<User>,
    Json(request): Json<SaveAssignmentRequest>,
) -> Result<Json<Value>, AppError> {
    authorize(
        &user,
        Capability::ManageAssignments,
        "Only administrators can edit department rosters",
    )?;

    let service = DepartmentService::new(&state.config);
    let saved = service.save(request, auth.token()).await?;

    state.summary_cache.invalidate();
    Ok(Json(json!(saved)))
}

#[axum::debug_handler]
pub async fn initialize_departments(
    State(state): State<Arc<AssignmentState>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    authorize(
        &user,
        Capability::SeedData,
        "Only administrators can initialize departments",
    )?;

    let service = DepartmentService::new(&state.config);
    let outcome = service.initialize(auth.token()).await?;

    state.summary_cache.invalidate();
    Ok(Json(json!(outcome)))
}

/// Staffing counts from the polling cache. Before the first refresh lands
/// the summary is computed on demand so early callers are not left empty.
#[axum::debug_handler]
pub async fn staffing_summary(
    State(state): State<Arc<AssignmentState>>,
    TypedHeader(_auth): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Value>, AppError> {
    if let Some(summary) = state.summary_cache.latest().await {
        return Ok(Json(json!(summary)));
    }

    let departments = DepartmentService::new(&state.config);
    let preferences = PreferenceService::new(&state.config);
    let summary = departments.summary(&preferences).await?;

    Ok(Json(json!(summary)))
}
