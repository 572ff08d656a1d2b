pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    AssignmentError, DepartmentNurseAssignment, NurseDepartmentPreference, SeedOutcome,
    StaffingSummary,
};
pub use router::{assignment_routes, AssignmentState};
pub use services::{DepartmentService, PollingCache, PreferenceService};
