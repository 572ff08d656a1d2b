use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub exp: Option<u64>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub iat: Option<u64>,
}

/// Authenticated caller, extracted from a validated JWT and inserted into
/// request extensions by the auth middleware.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Typed role of the caller. `None` for a missing or unrecognized role
    /// string; callers fall back to the base navigation set in that case.
    pub fn typed_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }
}
