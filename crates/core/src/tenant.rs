//! Per-tenant theme configuration.
//!
//! A [`TenantThemeConfig`] references theme definitions by id only; the
//! registry resolves those references at resolution time, so a dangling
//! `role_themes` entry degrades to "layer skipped" rather than erroring.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::tokens::{BrandingOverlay, ColorOverlay, ThemeLayer, TypographyOverlay};
use crate::types::{ThemeId, Timestamp};

/// Stored per-tenant theming record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantThemeConfig {
    pub tenant_id: String,
    pub branding: BrandingOverlay,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorOverlay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyOverlay>,
    /// Role name → theme-definition id redirect. Lets a tenant point
    /// "operator" at a registered custom theme instead of `role:operator`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub role_themes: BTreeMap<String, ThemeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_base_theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_environment: Option<String>,
    /// Compliance modes this tenant may activate. `standard` is always
    /// allowed and need not be listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_compliance_modes: Option<Vec<String>>,
    /// Stamped fresh on every upsert.
    #[serde(default = "chrono::Utc::now")]
    pub updated_at: Timestamp,
}

impl TenantThemeConfig {
    /// Synthesize the tenant's ad-hoc overlay from the branding/color/
    /// typography fields actually set on the record.
    pub fn overlay(&self) -> ThemeLayer {
        ThemeLayer {
            colors: self.colors.clone(),
            typography: self.typography.clone(),
            branding: if self.branding.is_empty() {
                None
            } else {
                Some(self.branding.clone())
            },
            ..Default::default()
        }
    }
}

/// DTO for upserting a tenant's theme configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertTenantThemeConfig {
    pub branding: BrandingOverlay,
    #[serde(default)]
    pub colors: Option<ColorOverlay>,
    #[serde(default)]
    pub typography: Option<TypographyOverlay>,
    #[serde(default)]
    pub role_themes: BTreeMap<String, ThemeId>,
    #[serde(default)]
    pub default_base_theme: Option<String>,
    #[serde(default)]
    pub default_environment: Option<String>,
    #[serde(default)]
    pub allowed_compliance_modes: Option<Vec<String>>,
}

impl UpsertTenantThemeConfig {
    /// Validate the request: `branding.name` is required.
    pub fn validate(&self) -> Result<(), CoreError> {
        match &self.branding.name {
            Some(name) if !name.trim().is_empty() => Ok(()),
            _ => Err(CoreError::Validation("branding.name is required".into())),
        }
    }

    /// Build the stored record for `tenant_id`, stamping `updated_at`.
    pub fn into_config(self, tenant_id: impl Into<String>) -> TenantThemeConfig {
        TenantThemeConfig {
            tenant_id: tenant_id.into(),
            branding: self.branding,
            colors: self.colors,
            typography: self.typography,
            role_themes: self.role_themes,
            default_base_theme: self.default_base_theme,
            default_environment: self.default_environment,
            allowed_compliance_modes: self.allowed_compliance_modes,
            updated_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upsert_with_name(name: &str) -> UpsertTenantThemeConfig {
        UpsertTenantThemeConfig {
            branding: BrandingOverlay {
                name: Some(name.to_string()),
                ..Default::default()
            },
            colors: None,
            typography: None,
            role_themes: BTreeMap::new(),
            default_base_theme: None,
            default_environment: None,
            allowed_compliance_modes: None,
        }
    }

    #[test]
    fn upsert_requires_branding_name() {
        assert!(upsert_with_name("Acme Industrial").validate().is_ok());
        assert!(upsert_with_name("   ").validate().is_err());

        let missing = UpsertTenantThemeConfig {
            branding: BrandingOverlay::default(),
            ..upsert_with_name("x")
        };
        assert!(missing.validate().is_err());
    }

    #[test]
    fn overlay_includes_only_populated_sections() {
        let config = upsert_with_name("Acme Industrial").into_config("acme");
        let overlay = config.overlay();

        assert!(overlay.branding.is_some());
        assert!(overlay.colors.is_none());
        assert!(overlay.typography.is_none());
        assert!(!overlay.is_empty());
    }

    #[test]
    fn overlay_of_blank_config_is_empty() {
        let config = TenantThemeConfig {
            tenant_id: "acme".into(),
            branding: BrandingOverlay::default(),
            colors: None,
            typography: None,
            role_themes: BTreeMap::new(),
            default_base_theme: None,
            default_environment: None,
            allowed_compliance_modes: None,
            updated_at: chrono::Utc::now(),
        };
        assert!(config.overlay().is_empty());
    }
}
