//! Theme resolver: turns a [`ThemeResolutionContext`] into a fully composed
//! [`ResolvedTheme`] by collecting the applicable definition per layer, in
//! fixed precedence order, and feeding them to the composition engine.
//!
//! Resolution never fails on missing layers — absence means "skip" — so the
//! resolver only reflects registry state. The single hard requirement
//! (`base_theme` must be present) is enforced at the HTTP boundary.

use serde::{Deserialize, Serialize};

use crate::compose::{compose_theme, generate_cache_key};
use crate::definition::ThemeLayerKind;
use crate::registry::ThemeRegistry;
use crate::tokens::{ThemeLayer, ThemeTokens};
use crate::types::{ThemeId, Timestamp};

/// Compliance mode denoting "no compliance overlay"; never looked up.
pub const COMPLIANCE_STANDARD: &str = "standard";

/// Applied-layer id recorded for the tenant config's synthesized overlay.
fn tenant_overrides_layer_id(tenant_id: &str) -> String {
    format!("tenant:{tenant_id}:overrides")
}

/// Applied-layer id recorded for the caller's ad-hoc preference overlay.
pub const USER_PREFERENCES_LAYER_ID: &str = "user:preferences";

/// Applied-layer marker appended by [`ThemeResolver::preview`].
pub const PREVIEW_LAYER_ID: &str = "preview";

// ---------------------------------------------------------------------------
// Context and output types
// ---------------------------------------------------------------------------

/// How the platform is deployed. Informational only; composition does not
/// consult it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentMode {
    #[default]
    Saas,
    OnPrem,
}

/// Caller-supplied selectors determining which definitions apply.
///
/// Transient: built per request, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeResolutionContext {
    /// Base theme name (looked up as `base:{name}`). Required at the HTTP
    /// boundary; defaults to empty here so the adapter can reject it with a
    /// proper validation error instead of a deserialization failure.
    pub base_theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_preferences: Option<ThemeLayer>,
    pub deployment_mode: DeploymentMode,
}

/// Output of a resolution: composed tokens plus the audit trail that
/// produced them. Constructed fresh on every call, never cached here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTheme {
    pub tokens: ThemeTokens,
    /// Ids of the layers actually applied, in application order.
    pub applied_layers: Vec<ThemeId>,
    pub resolved_at: Timestamp,
    pub cache_key: String,
    pub context: ThemeResolutionContext,
}

/// A registered definition reduced to its listing fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeSummary {
    pub id: ThemeId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_system: bool,
}

/// The themes a caller may select per layer, after tenant authorization
/// filtering on the compliance set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailableThemes {
    pub base_themes: Vec<ThemeSummary>,
    pub role_themes: Vec<ThemeSummary>,
    pub environment_themes: Vec<ThemeSummary>,
    pub compliance_themes: Vec<ThemeSummary>,
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Read-only view over a registry that performs layer resolution.
pub struct ThemeResolver<'a> {
    registry: &'a ThemeRegistry,
}

impl<'a> ThemeResolver<'a> {
    pub fn new(registry: &'a ThemeRegistry) -> Self {
        Self { registry }
    }

    /// Resolve the context into a composed token set.
    ///
    /// Layer order: base, tenant config overlay, `tenant:{id}` definition,
    /// role (with the tenant's `role_themes` redirect taking precedence over
    /// `role:{role}`), environment, compliance (unless `"standard"`), then
    /// the caller's ad-hoc user preferences.
    pub fn resolve(&self, context: &ThemeResolutionContext) -> ResolvedTheme {
        let mut layers: Vec<ThemeLayer> = Vec::new();
        let mut applied: Vec<ThemeId> = Vec::new();

        let push_definition = |layers: &mut Vec<ThemeLayer>, applied: &mut Vec<ThemeId>, id: &str| {
            if let Some(definition) = self.registry.get(id) {
                layers.push(definition.tokens.clone());
                applied.push(definition.id.clone());
            }
        };

        // 1. Base.
        push_definition(
            &mut layers,
            &mut applied,
            &format!("base:{}", context.base_theme),
        );

        // 2. Tenant: the config-derived overlay and a literally-registered
        //    `tenant:{id}` definition are independent sources; both apply
        //    before role resolution.
        let tenant_config = context
            .tenant_id
            .as_deref()
            .and_then(|tenant_id| self.registry.get_tenant_config(tenant_id));

        if let Some(tenant_id) = context.tenant_id.as_deref() {
            if let Some(config) = tenant_config {
                let overlay = config.overlay();
                if !overlay.is_empty() {
                    layers.push(overlay);
                    applied.push(tenant_overrides_layer_id(tenant_id));
                }
            }
            push_definition(&mut layers, &mut applied, &format!("tenant:{tenant_id}"));
        }

        // 3. Role, honoring the tenant's redirect when configured.
        if let Some(role) = context.role.as_deref() {
            let role_theme_id = tenant_config
                .and_then(|config| config.role_themes.get(role).cloned())
                .unwrap_or_else(|| format!("role:{role}"));
            push_definition(&mut layers, &mut applied, &role_theme_id);
        }

        // 4. Environment.
        if let Some(environment) = context.environment.as_deref() {
            push_definition(&mut layers, &mut applied, &format!("env:{environment}"));
        }

        // 5. Compliance. "standard" is the no-op state and is never looked
        //    up, so it resolves exactly as if compliance were absent.
        if let Some(mode) = context.compliance_mode.as_deref() {
            if mode != COMPLIANCE_STANDARD {
                push_definition(&mut layers, &mut applied, &format!("compliance:{mode}"));
            }
        }

        // 6. User preferences: highest precedence, applied verbatim.
        if let Some(preferences) = &context.user_preferences {
            if !preferences.is_empty() {
                layers.push(preferences.clone());
                applied.push(USER_PREFERENCES_LAYER_ID.to_string());
            }
        }

        let tokens = compose_theme(&layers);
        let cache_key = generate_cache_key(&applied);

        ResolvedTheme {
            tokens,
            applied_layers: applied,
            resolved_at: chrono::Utc::now(),
            cache_key,
            context: context.clone(),
        }
    }

    /// Resolve, then overlay a hypothetical extra layer without persisting
    /// anything. When `additional` is present the literal `"preview"` marker
    /// is appended to the applied-layer list and the cache key recomputed.
    pub fn preview(
        &self,
        context: &ThemeResolutionContext,
        additional: Option<&ThemeLayer>,
    ) -> ResolvedTheme {
        let mut resolved = self.resolve(context);

        if let Some(extra) = additional {
            extra.apply(&mut resolved.tokens);
            resolved.applied_layers.push(PREVIEW_LAYER_ID.to_string());
            resolved.cache_key = generate_cache_key(&resolved.applied_layers);
        }

        resolved
    }

    /// List the selectable themes per layer.
    ///
    /// Base/role/environment are returned in full. The compliance set is
    /// filtered to the tenant's `allowed_compliance_modes` whitelist when one
    /// exists; `compliance:standard` is always included since it is the
    /// no-op state.
    pub fn available_themes(&self, context: &ThemeResolutionContext) -> AvailableThemes {
        let allowed_modes = context
            .tenant_id
            .as_deref()
            .and_then(|tenant_id| self.registry.get_tenant_config(tenant_id))
            .and_then(|config| config.allowed_compliance_modes.clone());

        let compliance_themes = self
            .registry
            .get_all(Some(ThemeLayerKind::Compliance))
            .into_iter()
            .filter(|definition| match &allowed_modes {
                None => true,
                Some(modes) => {
                    definition.id == format!("compliance:{COMPLIANCE_STANDARD}")
                        || modes
                            .iter()
                            .any(|mode| definition.id == format!("compliance:{mode}"))
                }
            })
            .map(summarize)
            .collect();

        AvailableThemes {
            base_themes: self.summaries(ThemeLayerKind::Base),
            role_themes: self.summaries(ThemeLayerKind::Role),
            environment_themes: self.summaries(ThemeLayerKind::Environment),
            compliance_themes,
        }
    }

    fn summaries(&self, layer: ThemeLayerKind) -> Vec<ThemeSummary> {
        self.registry
            .get_all(Some(layer))
            .into_iter()
            .map(summarize)
            .collect()
    }
}

fn summarize(definition: &crate::definition::ThemeDefinition) -> ThemeSummary {
    ThemeSummary {
        id: definition.id.clone(),
        name: definition.name.clone(),
        description: definition.description.clone(),
        is_system: definition.is_system,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
