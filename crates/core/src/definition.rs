//! Registrable theme definitions and their request DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tokens::ThemeLayer;
use crate::types::{ThemeId, Timestamp};

/// The six logical resolution layers, lowest precedence first.
///
/// `User` is reserved for runtime-only overlays supplied in the resolution
/// context; definitions tagged `user` are rejected at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeLayerKind {
    Base,
    Tenant,
    Role,
    Environment,
    Compliance,
    User,
}

impl ThemeLayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeLayerKind::Base => "base",
            ThemeLayerKind::Tenant => "tenant",
            ThemeLayerKind::Role => "role",
            ThemeLayerKind::Environment => "environment",
            ThemeLayerKind::Compliance => "compliance",
            ThemeLayerKind::User => "user",
        }
    }
}

impl fmt::Display for ThemeLayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, registrable bundle of tokens tagged with one resolution layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    /// Globally unique id. System ids use the reserved `layer:name` scheme.
    pub id: ThemeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub layer: ThemeLayerKind,
    #[serde(default)]
    pub tokens: ThemeLayer,
    /// System definitions are write-once through the registry's mutation API.
    #[serde(default)]
    pub is_system: bool,
    #[serde(default = "chrono::Utc::now")]
    pub created_at: Timestamp,
}

impl ThemeDefinition {
    /// Create a custom (non-system) definition.
    pub fn new(
        id: impl Into<ThemeId>,
        name: impl Into<String>,
        layer: ThemeLayerKind,
        tokens: ThemeLayer,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            layer,
            tokens,
            is_system: false,
            created_at: chrono::Utc::now(),
        }
    }

    /// Create a seeded system definition.
    pub(crate) fn system(
        id: &str,
        name: &str,
        description: &str,
        layer: ThemeLayerKind,
        tokens: ThemeLayer,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            layer,
            tokens,
            is_system: true,
            created_at: chrono::Utc::now(),
        }
    }
}

/// DTO for registering a new custom definition.
///
/// Structural validation (non-empty id/name, no `user` layer) happens in
/// [`ThemeRegistry::register`](crate::registry::ThemeRegistry::register).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateThemeDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub layer: ThemeLayerKind,
    #[serde(default)]
    pub tokens: ThemeLayer,
}

impl From<CreateThemeDefinition> for ThemeDefinition {
    fn from(input: CreateThemeDefinition) -> Self {
        Self {
            id: input.id,
            name: input.name,
            description: input.description,
            layer: input.layer,
            tokens: input.tokens,
            is_system: false,
            created_at: chrono::Utc::now(),
        }
    }
}

/// DTO for partially updating a stored definition.
///
/// This is a shallow merge of the definition record — a supplied `tokens`
/// payload replaces the stored overlay wholesale, it is not deep-merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateThemeDefinition {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tokens: Option<ThemeLayer>,
}
