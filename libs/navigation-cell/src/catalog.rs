//! Static role catalog: every navigation entry the application knows about,
//! in display order, with the roles allowed to see it.

use shared_models::role::Role;

use crate::models::{MenuCategory, MenuItem};

pub const DASHBOARD_PATH: &str = "/dashboard";

const ALL_ROLES: &[Role] = &Role::ALL;

const ADMINS: &[Role] = &[Role::SuperAdmin, Role::Admin];

/// The full menu. Order here is display order; the gate filters but never
/// reorders.
pub const MENU: &[MenuItem] = &[
    MenuItem {
        title: "Dashboard",
        path: DASHBOARD_PATH,
        category: MenuCategory::Dashboard,
        required_roles: ALL_ROLES,
        external: false,
    },
    // Core Services
    MenuItem {
        title: "OPD Service",
        path: "/opd",
        category: MenuCategory::CoreServices,
        required_roles: &[
            Role::SuperAdmin,
            Role::Admin,
            Role::Doctor,
            Role::OpdManager,
        ],
        external: false,
    },
    MenuItem {
        title: "Patient Service",
        path: "/patients",
        category: MenuCategory::CoreServices,
        required_roles: &[
            Role::SuperAdmin,
            Role::Admin,
            Role::Doctor,
            Role::Nurse,
            Role::OpdManager,
        ],
        external: false,
    },
    MenuItem {
        title: "Nurse Assignment",
        path: "/nurse-assignment",
        category: MenuCategory::CoreServices,
        required_roles: &[Role::SuperAdmin, Role::Admin, Role::Nurse],
        external: false,
    },
    MenuItem {
        title: "Staff Scheduling",
        path: "/staff-scheduling",
        category: MenuCategory::CoreServices,
        required_roles: &[Role::SuperAdmin, Role::Admin, Role::Doctor],
        external: false,
    },
    MenuItem {
        title: "Consent Forms",
        path: "/consent-forms",
        category: MenuCategory::CoreServices,
        required_roles: &[
            Role::SuperAdmin,
            Role::Admin,
            Role::Doctor,
            Role::Nurse,
            Role::Patient,
        ],
        external: false,
    },
    // Support Services
    // OPD managers are allow-listed on Insurance Claims yet never see it:
    // the category overlay denies them all of Support Services.
    MenuItem {
        title: "Insurance Claims",
        path: "/insurance-claims",
        category: MenuCategory::SupportServices,
        required_roles: &[
            Role::SuperAdmin,
            Role::Admin,
            Role::Patient,
            Role::OpdManager,
        ],
        external: false,
    },
    MenuItem {
        title: "Medical Store",
        path: "/medical-store",
        category: MenuCategory::SupportServices,
        required_roles: &[Role::SuperAdmin, Role::Admin, Role::MedicalStore],
        external: false,
    },
    MenuItem {
        title: "Pathology Lab",
        path: "/pathology-lab",
        category: MenuCategory::SupportServices,
        required_roles: &[
            Role::SuperAdmin,
            Role::Admin,
            Role::Doctor,
            Role::PathologyLab,
            Role::Technician,
        ],
        external: false,
    },
    MenuItem {
        title: "Health Chatbot",
        path: "/chatbot",
        category: MenuCategory::SupportServices,
        required_roles: ALL_ROLES,
        external: false,
    },
    MenuItem {
        title: "Help Center",
        path: "https://help.hospital.example/",
        category: MenuCategory::SupportServices,
        required_roles: ALL_ROLES,
        external: true,
    },
    // Management
    MenuItem {
        title: "AI Analytics",
        path: "/analytics",
        category: MenuCategory::Management,
        required_roles: &[Role::SuperAdmin, Role::Admin, Role::OpdManager],
        external: false,
    },
    MenuItem {
        title: "Department Management",
        path: "/departments",
        category: MenuCategory::Management,
        required_roles: ADMINS,
        external: false,
    },
    MenuItem {
        title: "Staff Management",
        path: "/staff",
        category: MenuCategory::Management,
        required_roles: ADMINS,
        external: false,
    },
];

/// Ordered navigation entries for a role. Pure and total: an absent or
/// unrecognized role gets the base set (Dashboard only).
pub fn menu_for(role: Option<Role>) -> Vec<&'static MenuItem> {
    crate::gate::visible_items(role, MENU)
}
