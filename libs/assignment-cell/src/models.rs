use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use shared_models::error::AppError;

/// Nurse-centric view: which departments a nurse prefers to serve, plus the
/// last room/doctor/position they were assigned to.
///
/// Deliberately independent of `DepartmentNurseAssignment`; the two tables
/// are edited through separate flows and are not kept in sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NurseDepartmentPreference {
    pub id: Uuid,
    pub nurse_id: String,
    pub nurse_name: String,
    pub primary_department: String,
    pub secondary_department: String,
    pub tertiary_department: String,
    pub is_available: bool,
    pub assigned_room: Option<String>,
    pub assigned_doctor: Option<String>,
    pub assigned_position: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Department-centric view: the roster of up to three nurses serving one
/// department. Capacity is fixed at three slots; empty slots are null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentNurseAssignment {
    pub id: Uuid,
    pub department_name: String,
    pub primary_nurse_id: Option<String>,
    pub primary_nurse_name: Option<String>,
    pub secondary_nurse_id: Option<String>,
    pub secondary_nurse_name: Option<String>,
    pub tertiary_nurse_id: Option<String>,
    pub tertiary_nurse_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DepartmentNurseAssignment {
    pub fn filled_slots(&self) -> usize {
        [
            &self.primary_nurse_id,
            &self.secondary_nurse_id,
            &self.tertiary_nurse_id,
        ]
        .iter()
        .filter(|slot| slot.is_some())
        .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePreferenceRequest {
    pub nurse_id: String,
    pub nurse_name: String,
    pub primary_department: String,
    pub secondary_department: String,
    pub tertiary_department: String,
    pub assigned_room: Option<String>,
    pub assigned_doctor: Option<String>,
    pub assigned_position: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleAvailabilityRequest {
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveAssignmentRequest {
    pub department_name: String,
    pub primary_nurse_id: Option<String>,
    pub primary_nurse_name: Option<String>,
    pub secondary_nurse_id: Option<String>,
    pub secondary_nurse_name: Option<String>,
    pub tertiary_nurse_id: Option<String>,
    pub tertiary_nurse_name: Option<String>,
}

/// Result of an idempotent bulk create: rows inserted vs. rows already
/// present and left untouched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeedOutcome {
    pub created: usize,
    pub skipped: usize,
}

/// Derived staffing counts served from the polling cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingSummary {
    pub total_departments: usize,
    pub fully_staffed: usize,
    pub partially_staffed: usize,
    pub unstaffed: usize,
    pub total_nurses: usize,
    pub available_nurses: usize,
    pub refreshed_at: DateTime<Utc>,
}

#[derive(Error, Debug)]
pub enum AssignmentError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl From<AssignmentError> for AppError {
    fn from(err: AssignmentError) -> Self {
        match err {
            AssignmentError::Validation(msg) => AppError::Validation(msg),
            AssignmentError::NotFound(msg) => AppError::NotFound(msg),
            AssignmentError::Store(e) => AppError::Store(e.to_string()),
        }
    }
}
