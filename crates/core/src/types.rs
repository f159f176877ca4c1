/// Theme definition and tenant identifiers are opaque strings.
///
/// System definition ids use the reserved `layer:name` prefix scheme
/// (`base:light`, `role:operator`, `env:factory-floor`,
/// `compliance:audit-mode`).
pub type ThemeId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
