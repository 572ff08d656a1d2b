use anyhow::anyhow;
use chrono::Utc;
use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::StoreClient;

use crate::models::{AssignmentError, NurseDepartmentPreference, SavePreferenceRequest, SeedOutcome};
use crate::services::seed::NURSE_ROSTER;

const TABLE: &str = "/rest/v1/nurse_department_preferences";

pub struct PreferenceService {
    store: StoreClient,
}

impl PreferenceService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
        }
    }

    pub async fn list(
        &self,
        auth_token: Option<&str>,
    ) -> Result<Vec<NurseDepartmentPreference>, AssignmentError> {
        let path = format!("{}?order=nurse_name.asc", TABLE);
        let rows: Vec<Value> = self.store.request(Method::GET, &path, auth_token, None).await?;

        let preferences = rows
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<NurseDepartmentPreference>, _>>()
            .map_err(|e| AssignmentError::Store(anyhow!("malformed preference row: {}", e)))?;

        Ok(preferences)
    }

    /// Upsert a nurse's department preferences, keyed by nurse id. The
    /// three-department invariant is validated before anything is sent to
    /// the store; the store's unique constraint remains the authority.
    pub async fn save(
        &self,
        request: SavePreferenceRequest,
        auth_token: &str,
    ) -> Result<NurseDepartmentPreference, AssignmentError> {
        validate_preference(&request)?;
        debug!("Saving department preferences for nurse {}", request.nurse_id);

        let existing = self.find(&request.nurse_id, auth_token).await?;
        let now = Utc::now().to_rfc3339();

        let rows: Vec<Value> = if existing.is_some() {
            let body = json!({
                "nurse_name": request.nurse_name,
                "primary_department": request.primary_department,
                "secondary_department": request.secondary_department,
                "tertiary_department": request.tertiary_department,
                "assigned_room": request.assigned_room,
                "assigned_doctor": request.assigned_doctor,
                "assigned_position": request.assigned_position,
                "updated_at": now,
            });

            let path = format!("{}?nurse_id=eq.{}", TABLE, request.nurse_id);
            self.store
                .request_with_headers(
                    Method::PATCH,
                    &path,
                    Some(auth_token),
                    Some(body),
                    Some(StoreClient::return_representation()),
                )
                .await?
        } else {
            let body = json!({
                "id": Uuid::new_v4(),
                "nurse_id": request.nurse_id,
                "nurse_name": request.nurse_name,
                "primary_department": request.primary_department,
                "secondary_department": request.secondary_department,
                "tertiary_department": request.tertiary_department,
                "is_available": true,
                "assigned_room": request.assigned_room,
                "assigned_doctor": request.assigned_doctor,
                "assigned_position": request.assigned_position,
                "created_at": now,
                "updated_at": now,
            });

            self.store
                .request_with_headers(
                    Method::POST,
                    TABLE,
                    Some(auth_token),
                    Some(body),
                    Some(StoreClient::return_representation()),
                )
                .await?
        };

        first_row(rows, "Failed to save nurse preference")
    }

    /// Hard delete, not a soft flag.
    pub async fn delete(&self, nurse_id: &str, auth_token: &str) -> Result<(), AssignmentError> {
        debug!("Deleting preference record for nurse {}", nurse_id);

        if self.find(nurse_id, auth_token).await?.is_none() {
            return Err(AssignmentError::NotFound(format!(
                "No preference record for nurse {}",
                nurse_id
            )));
        }

        let path = format!("{}?nurse_id=eq.{}", TABLE, nurse_id);
        let _: Vec<Value> = self
            .store
            .request(Method::DELETE, &path, Some(auth_token), None)
            .await?;

        Ok(())
    }

    /// Flip the availability flag only. The last assigned room, doctor and
    /// position are kept as historical context for re-activation.
    pub async fn toggle_availability(
        &self,
        nurse_id: &str,
        is_available: bool,
        auth_token: &str,
    ) -> Result<NurseDepartmentPreference, AssignmentError> {
        debug!("Setting nurse {} availability -> {}", nurse_id, is_available);

        let body = json!({
            "is_available": is_available,
            "updated_at": Utc::now().to_rfc3339(),
        });

        let path = format!("{}?nurse_id=eq.{}", TABLE, nurse_id);
        let rows: Vec<Value> = self
            .store
            .request_with_headers(
                Method::PATCH,
                &path,
                Some(auth_token),
                Some(body),
                Some(StoreClient::return_representation()),
            )
            .await?;

        if rows.is_empty() {
            return Err(AssignmentError::NotFound(format!(
                "No preference record for nurse {}",
                nurse_id
            )));
        }

        first_row(rows, "Failed to update availability")
    }

    /// Idempotent bulk create from the fixed roster: rows whose nurse id
    /// already exists are skipped, never overwritten.
    pub async fn seed(&self, auth_token: &str) -> Result<SeedOutcome, AssignmentError> {
        let existing = self.list(Some(auth_token)).await?;
        let existing_ids: std::collections::HashSet<&str> =
            existing.iter().map(|p| p.nurse_id.as_str()).collect();

        let mut created = 0;
        let mut skipped = 0;

        for entry in NURSE_ROSTER {
            if existing_ids.contains(entry.nurse_id) {
                skipped += 1;
                continue;
            }

            let now = Utc::now().to_rfc3339();
            let body = json!({
                "id": Uuid::new_v4(),
                "nurse_id": entry.nurse_id,
                "nurse_name": entry.nurse_name,
                "primary_department": entry.primary_department,
                "secondary_department": entry.secondary_department,
                "tertiary_department": entry.tertiary_department,
                "is_available": true,
                "assigned_room": Value::Null,
                "assigned_doctor": Value::Null,
                "assigned_position": Value::Null,
                "created_at": now,
                "updated_at": now,
            });

            let _: Vec<Value> = self
                .store
                .request_with_headers(
                    Method::POST,
                    TABLE,
                    Some(auth_token),
                    Some(body),
                    Some(StoreClient::return_representation()),
                )
                .await?;
            created += 1;
        }

        debug!("Nurse seed complete: {} created, {} skipped", created, skipped);
        Ok(SeedOutcome { created, skipped })
    }

    async fn find(
        &self,
        nurse_id: &str,
        auth_token: &str,
    ) -> Result<Option<NurseDepartmentPreference>, AssignmentError> {
        let path = format!("{}?nurse_id=eq.{}", TABLE, nurse_id);
        let rows: Vec<Value> = self
            .store
            .request(Method::GET, &path, Some(auth_token), None)
            .await?;

        match rows.into_iter().next() {
            Some(row) => {
                let preference = serde_json::from_value(row)
                    .map_err(|e| AssignmentError::Store(anyhow!("malformed preference row: {}", e)))?;
                Ok(Some(preference))
            }
            None => Ok(None),
        }
    }
}

fn validate_preference(request: &SavePreferenceRequest) -> Result<(), AssignmentError> {
    let required = [
        ("nurse_id", &request.nurse_id),
        ("nurse_name", &request.nurse_name),
        ("primary_department", &request.primary_department),
        ("secondary_department", &request.secondary_department),
        ("tertiary_department", &request.tertiary_department),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AssignmentError::Validation(format!(
                "{} must not be blank",
                field
            )));
        }
    }

    let departments = [
        request.primary_department.trim(),
        request.secondary_department.trim(),
        request.tertiary_department.trim(),
    ];

    for i in 0..departments.len() {
        for j in i + 1..departments.len() {
            if departments[i] == departments[j] {
                return Err(AssignmentError::Validation(format!(
                    "Department '{}' selected more than once",
                    departments[i]
                )));
            }
        }
    }

    Ok(())
}

fn first_row(
    rows: Vec<Value>,
    context: &str,
) -> Result<NurseDepartmentPreference, AssignmentError> {
    let row = rows
        .into_iter()
        .next()
        .ok_or_else(|| AssignmentError::Store(anyhow!("{}", context)))?;

    serde_json::from_value(row)
        .map_err(|e| AssignmentError::Store(anyhow!("malformed preference row: {}", e)))
}
