//! Well-known role name constants.
//!
//! These match the role names issued by the authentication service in JWT
//! claims and the `role:*` system theme ids seeded by the registry.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_SUPERVISOR: &str = "supervisor";
pub const ROLE_OPERATOR: &str = "operator";
