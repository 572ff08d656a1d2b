use axum::{extract::Extension, Json};
use serde_json::{json, Value};

use shared_models::auth::User;
use shared_models::error::AppError;

use crate::gate;

/// Menu for the authenticated caller's role. A missing or unrecognized role
/// degrades to the base Dashboard-only menu rather than erroring.
#[axum::debug_handler]
pub async fn get_menu(Extension(user): Extension<User>) -> Result<Json<Value>, AppError> {
    let role = user.typed_role();
    let sections = gate::sections(role);

    Ok(Json(json!({
        "role": role.map(|r| r.as_str()),
        "sections": sections,
    })))
}
