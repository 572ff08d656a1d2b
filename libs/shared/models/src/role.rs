use serde::{Deserialize, Serialize};

/// Closed set of hospital roles. A user's role is immutable once assigned
/// and drives every visibility and capability decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    Doctor,
    Nurse,
    OpdManager,
    Patient,
    MedicalStore,
    PathologyLab,
    Technician,
}

/// Server-side actions gated per role. The menu overlay in the navigation
/// cell handles what a role *sees*; this table handles what it may *do*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ViewAssignments,
    ManagePreferences,
    ManageAssignments,
    SeedData,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Doctor,
        Role::Nurse,
        Role::OpdManager,
        Role::Patient,
        Role::MedicalStore,
        Role::PathologyLab,
        Role::Technician,
    ];

    /// Parse the wire form of a role. Unknown strings yield `None`; callers
    /// treat that as "no role" rather than an error.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "SUPER_ADMIN" => Some(Role::SuperAdmin),
            "ADMIN" => Some(Role::Admin),
            "DOCTOR" => Some(Role::Doctor),
            "NURSE" => Some(Role::Nurse),
            "OPD_MANAGER" => Some(Role::OpdManager),
            "PATIENT" => Some(Role::Patient),
            "MEDICAL_STORE" => Some(Role::MedicalStore),
            "PATHOLOGY_LAB" => Some(Role::PathologyLab),
            "TECHNICIAN" => Some(Role::Technician),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::Doctor => "DOCTOR",
            Role::Nurse => "NURSE",
            Role::OpdManager => "OPD_MANAGER",
            Role::Patient => "PATIENT",
            Role::MedicalStore => "MEDICAL_STORE",
            Role::PathologyLab => "PATHOLOGY_LAB",
            Role::Technician => "TECHNICIAN",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin)
    }

    /// Capability lookup. Deny by default: anything not listed here is not
    /// permitted for the role.
    pub fn can(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewAssignments => true,
            Capability::ManagePreferences => self.is_admin() || *self == Role::Nurse,
            Capability::ManageAssignments => self.is_admin(),
            Capability::SeedData => self.is_admin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_role() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn unknown_role_string_parses_to_none() {
        assert_eq!(Role::parse("RECEPTIONIST"), None);
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn only_admins_manage_assignments() {
        for role in Role::ALL {
            assert_eq!(
                role.can(Capability::ManageAssignments),
                role.is_admin(),
                "unexpected assignment capability for {:?}",
                role
            );
        }
    }

    #[test]
    fn nurses_manage_their_own_preferences() {
        assert!(Role::Nurse.can(Capability::ManagePreferences));
        assert!(!Role::Patient.can(Capability::ManagePreferences));
        assert!(!Role::OpdManager.can(Capability::ManagePreferences));
    }
}
