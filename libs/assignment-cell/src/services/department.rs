use anyhow::anyhow;
use chrono::Utc;
use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::StoreClient;

use crate::models::{
    AssignmentError, DepartmentNurseAssignment, SaveAssignmentRequest, SeedOutcome,
    StaffingSummary,
};
use crate::services::preference::PreferenceService;
use crate::services::seed::DEPARTMENT_CATALOG;

const TABLE: &str = "/rest/v1/department_nurse_assignments";

pub struct DepartmentService {
    store: StoreClient,
}

impl DepartmentService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
        }
    }

    pub async fn list(
        &self,
        auth_token: Option<&str>,
    ) -> Result<Vec<DepartmentNurseAssignment>, AssignmentError> {
        let path = format!("{}?order=department_name.asc", TABLE);
        let rows: Vec<Value> = self.store.request(Method::GET, &path, auth_token, None).await?;

        rows.into_iter()
            .map(|row| {
                serde_json::from_value(row)
                    .map_err(|e| AssignmentError::Store(anyhow!("malformed assignment row: {}", e)))
            })
            .collect()
    }

    /// Upsert a department's three-slot roster, keyed by department name.
    /// Empty slot values are normalized to null before persistence; a nurse
    /// id occupying two slots is rejected up front. Last write wins: there
    /// is no version token, so concurrent editors can overwrite each other.
    pub async fn save(
        &self,
        request: SaveAssignmentRequest,
        auth_token: &str,
    ) -> Result<DepartmentNurseAssignment, AssignmentError> {
        let request = normalize_assignment(request);
        validate_assignment(&request)?;
        debug!("Saving nurse roster for department {}", request.department_name);

        let existing = self.find(&request.department_name, auth_token).await?;
        let now = Utc::now().to_rfc3339();

        let slots = json!({
            "primary_nurse_id": request.primary_nurse_id,
            "primary_nurse_name": request.primary_nurse_name,
            "secondary_nurse_id": request.secondary_nurse_id,
            "secondary_nurse_name": request.secondary_nurse_name,
            "tertiary_nurse_id": request.tertiary_nurse_id,
            "tertiary_nurse_name": request.tertiary_nurse_name,
        });

        let rows: Vec<Value> = if existing.is_some() {
            let mut body = slots;
            body["updated_at"] = json!(now);

            let path = format!("{}?department_name=eq.{}", TABLE, request.department_name);
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
            let mut body = slots;
            body["id"] = json!(Uuid::new_v4());
            body["department_name"] = json!(request.department_name);
            body["created_at"] = json!(now);
            body["updated_at"] = json!(now);

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

        first_row(rows, "Failed to save department assignment")
    }

    /// Idempotent bulk create of the fixed department catalog. Departments
    /// that already have a record (matched by name) are skipped, so existing
    /// rosters are never overwritten.
    pub async fn initialize(&self, auth_token: &str) -> Result<SeedOutcome, AssignmentError> {
        let existing = self.list(Some(auth_token)).await?;
        let existing_names: std::collections::HashSet<&str> =
            existing.iter().map(|a| a.department_name.as_str()).collect();

        let mut created = 0;
        let mut skipped = 0;

        for department in DEPARTMENT_CATALOG {
            if existing_names.contains(department) {
                skipped += 1;
                continue;
            }

            let now = Utc::now().to_rfc3339();
            let body = json!({
                "id": Uuid::new_v4(),
                "department_name": department,
                "primary_nurse_id": Value::Null,
                "primary_nurse_name": Value::Null,
                "secondary_nurse_id": Value::Null,
                "secondary_nurse_name": Value::Null,
                "tertiary_nurse_id": Value::Null,
                "tertiary_nurse_name": Value::Null,
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

        debug!(
            "Department initialize complete: {} created, {} skipped",
            created, skipped
        );
        Ok(SeedOutcome { created, skipped })
    }

    /// Derived staffing counts over both tables. Fetched by the polling
    /// cache with the service key; callers read the cached copy.
    pub async fn summary(
        &self,
        preference_service: &PreferenceService,
    ) -> Result<StaffingSummary, AssignmentError> {
        let assignments = self.list(None).await?;
        let preferences = preference_service.list(None).await?;

        let fully_staffed = assignments.iter().filter(|a| a.filled_slots() == 3).count();
        let unstaffed = assignments.iter().filter(|a| a.filled_slots() == 0).count();

        Ok(StaffingSummary {
            total_departments: assignments.len(),
            fully_staffed,
            partially_staffed: assignments.len() - fully_staffed - unstaffed,
            unstaffed,
            total_nurses: preferences.len(),
            available_nurses: preferences.iter().filter(|p| p.is_available).count(),
            refreshed_at: Utc::now(),
        })
    }

    async fn find(
        &self,
        department_name: &str,
        auth_token: &str,
    ) -> Result<Option<DepartmentNurseAssignment>, AssignmentError> {
        let path = format!("{}?department_name=eq.{}", TABLE, department_name);
        let rows: Vec<Value> = self
            .store
            .request(Method::GET, &path, Some(auth_token), None)
            .await?;

        match rows.into_iter().next() {
            Some(row) => {
                let assignment = serde_json::from_value(row)
                    .map_err(|e| AssignmentError::Store(anyhow!("malformed assignment row: {}", e)))?;
                Ok(Some(assignment))
            }
            None => Ok(None),
        }
    }
}

/// Blank slot values become null, and a slot with no nurse id carries no
/// nurse name either.
fn normalize_assignment(mut request: SaveAssignmentRequest) -> SaveAssignmentRequest {
    fn clean(value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        })
    }

    fn slot(id: Option<String>, name: Option<String>) -> (Option<String>, Option<String>) {
        let id = clean(id);
        let name = if id.is_some() { clean(name) } else { None };
        (id, name)
    }

    (request.primary_nurse_id, request.primary_nurse_name) =
        slot(request.primary_nurse_id, request.primary_nurse_name);
    (request.secondary_nurse_id, request.secondary_nurse_name) =
        slot(request.secondary_nurse_id, request.secondary_nurse_name);
    (request.tertiary_nurse_id, request.tertiary_nurse_name) =
        slot(request.tertiary_nurse_id, request.tertiary_nurse_name);

    request
}

fn validate_assignment(request: &SaveAssignmentRequest) -> Result<(), AssignmentError> {
    if request.department_name.trim().is_empty() {
        return Err(AssignmentError::Validation(
            "department_name must not be blank".to_string(),
        ));
    }

    let slots = [
        &request.primary_nurse_id,
        &request.secondary_nurse_id,
        &request.tertiary_nurse_id,
    ];

    for i in 0..slots.len() {
        for j in i + 1..slots.len() {
            if let (Some(a), Some(b)) = (slots[i], slots[j]) {
                if a == b {
                    return Err(AssignmentError::Validation(format!(
                        "Nurse {} assigned to more than one slot",
                        a
                    )));
                }
            }
        }
    }

    Ok(())
}

fn first_row(
    rows: Vec<Value>,
    context: &str,
) -> Result<DepartmentNurseAssignment, AssignmentError> {
    let row = rows
        .into_iter()
        .next()
        .ok_or_else(|| AssignmentError::Store(anyhow!("{}", context)))?;

    serde_json::from_value(row)
        .map_err(|e| AssignmentError::Store(anyhow!("malformed assignment row: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SaveAssignmentRequest {
        SaveAssignmentRequest {
            department_name: "Cardiology".to_string(),
            primary_nurse_id: Some("N001".to_string()),
            primary_nurse_name: Some("Asha Verma".to_string()),
            secondary_nurse_id: Some("N002".to_string()),
            secondary_nurse_name: Some("Priya Nair".to_string()),
            tertiary_nurse_id: None,
            tertiary_nurse_name: None,
        }
    }

    #[test]
    fn duplicate_nurse_across_slots_is_rejected() {
        let mut req = request();
        req.secondary_nurse_id = Some("N001".to_string());
        assert!(matches!(
            validate_assignment(&normalize_assignment(req)),
            Err(AssignmentError::Validation(_))
        ));
    }

    #[test]
    fn empty_strings_normalize_to_null() {
        let mut req = request();
        req.tertiary_nurse_id = Some("  ".to_string());
        req.tertiary_nurse_name = Some("Ghost".to_string());

        let normalized = normalize_assignment(req);
        assert_eq!(normalized.tertiary_nurse_id, None);
        // A slot with no nurse id cannot keep a dangling name.
        assert_eq!(normalized.tertiary_nurse_name, None);
    }

    #[test]
    fn partial_staffing_is_permitted() {
        let req = SaveAssignmentRequest {
            department_name: "Cardiology".to_string(),
            primary_nurse_id: None,
            primary_nurse_name: None,
            secondary_nurse_id: None,
            secondary_nurse_name: None,
            tertiary_nurse_id: None,
            tertiary_nurse_name: None,
        };
        assert!(validate_assignment(&normalize_assignment(req)).is_ok());
    }

    #[test]
    fn blank_department_name_is_rejected() {
        let mut req = request();
        req.department_name = "".to_string();
        assert!(matches!(
            validate_assignment(&req),
            Err(AssignmentError::Validation(_))
        ));
    }
}
