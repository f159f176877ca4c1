//! In-memory theme registry.
//!
//! Holds every registered [`ThemeDefinition`] keyed by id plus the per-tenant
//! [`TenantThemeConfig`] records, and enforces the core protection invariant:
//! system definitions are write-once through the public mutation API.
//!
//! The registry is a plain synchronous map intended for single-process use.
//! It defines no concurrent-mutation contract of its own; callers that share
//! it across request handlers wrap it in their own lock (the HTTP adapter
//! uses `std::sync::RwLock`).

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::defaults::system_definitions;
use crate::definition::{ThemeDefinition, ThemeLayerKind, UpdateThemeDefinition};
use crate::error::CoreError;
use crate::tenant::TenantThemeConfig;
use crate::types::ThemeId;

// ---------------------------------------------------------------------------
// Lifecycle events
// ---------------------------------------------------------------------------

/// Lifecycle notification emitted after a successful registry mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ThemeEvent {
    Registered { id: ThemeId },
    Updated { id: ThemeId },
    Removed { id: ThemeId },
    TenantConfigUpdated { tenant_id: String },
}

impl ThemeEvent {
    /// Stable event name for downstream buses and logs.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeEvent::Registered { .. } => "theme:registered",
            ThemeEvent::Updated { .. } => "theme:updated",
            ThemeEvent::Removed { .. } => "theme:removed",
            ThemeEvent::TenantConfigUpdated { .. } => "tenant:config-updated",
        }
    }
}

/// Handle returned by [`ThemeRegistry::subscribe`]; pass to
/// [`ThemeRegistry::unsubscribe`] to stop delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Listener = Box<dyn Fn(&ThemeEvent) + Send + Sync>;

// ---------------------------------------------------------------------------
// Bundle / stats value types
// ---------------------------------------------------------------------------

/// Portable export of all non-system state, for backup/migration and
/// offline theme-pack installation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeBundle {
    pub themes: Vec<ThemeDefinition>,
    pub tenants: Vec<TenantThemeConfig>,
}

/// Read-only aggregate counts for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryStats {
    pub total_themes: usize,
    pub system_themes: usize,
    pub custom_themes: usize,
    /// Definition count per layer tag, keyed by the lowercase layer name.
    pub themes_by_layer: BTreeMap<String, usize>,
    pub tenant_configs: usize,
    pub initialized: bool,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// In-memory store of theme definitions and tenant configurations.
pub struct ThemeRegistry {
    themes: HashMap<ThemeId, ThemeDefinition>,
    tenants: HashMap<String, TenantThemeConfig>,
    listeners: Vec<(SubscriberId, Listener)>,
    next_subscriber: u64,
    initialized: bool,
}

impl fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("themes", &self.themes.len())
            .field("tenants", &self.tenants.len())
            .field("listeners", &self.listeners.len())
            .field("initialized", &self.initialized)
            .finish()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    /// Create a registry seeded with the four system bundles.
    ///
    /// Seeding happens exactly once here; it is never repeated implicitly.
    /// Call [`load_system_defaults`](Self::load_system_defaults) to re-seed
    /// explicitly.
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            tenants: HashMap::new(),
            listeners: Vec::new(),
            next_subscriber: 0,
            initialized: false,
        };
        registry.load_system_defaults();
        registry
    }

    /// Load the base/role/environment/compliance system bundles, marking
    /// every entry `is_system` and unconditionally overwriting any existing
    /// entry at the same id.
    ///
    /// Idempotent, but destructive to a non-system definition that collides
    /// with a reserved `layer:name` id.
    pub fn load_system_defaults(&mut self) {
        for definition in system_definitions() {
            self.themes.insert(definition.id.clone(), definition);
        }
        self.initialized = true;
    }

    // -- Definition mutations ------------------------------------------------

    /// Insert or replace a definition.
    ///
    /// Fails when the id is already held by a system definition and the
    /// incoming definition is not itself marked system, and on structurally
    /// invalid input (empty id/name, `user` layer tag).
    pub fn register(&mut self, definition: ThemeDefinition) -> Result<(), CoreError> {
        if definition.id.trim().is_empty() {
            return Err(CoreError::Validation("theme id must not be empty".into()));
        }
        if definition.name.trim().is_empty() {
            return Err(CoreError::Validation("theme name must not be empty".into()));
        }
        if definition.layer == ThemeLayerKind::User {
            return Err(CoreError::Validation(
                "the user layer is reserved for runtime overlays and cannot be registered".into(),
            ));
        }

        if let Some(existing) = self.themes.get(&definition.id) {
            if existing.is_system && !definition.is_system {
                return Err(CoreError::SystemThemeImmutable {
                    id: definition.id.clone(),
                });
            }
        }

        let id = definition.id.clone();
        self.themes.insert(id.clone(), definition);
        self.emit(&ThemeEvent::Registered { id });
        Ok(())
    }

    /// Shallow-merge `patch` into the stored definition record.
    ///
    /// This updates the record fields (name/description/tokens); it is not a
    /// deep merge of the token overlay.
    pub fn update(
        &mut self,
        id: &str,
        patch: UpdateThemeDefinition,
    ) -> Result<ThemeDefinition, CoreError> {
        let definition = self.themes.get_mut(id).ok_or(CoreError::NotFound {
            entity: "ThemeDefinition",
            id: id.to_string(),
        })?;

        if definition.is_system {
            return Err(CoreError::SystemThemeImmutable { id: id.to_string() });
        }

        if let Some(name) = patch.name {
            definition.name = name;
        }
        if let Some(description) = patch.description {
            definition.description = Some(description);
        }
        if let Some(tokens) = patch.tokens {
            definition.tokens = tokens;
        }

        let updated = definition.clone();
        self.emit(&ThemeEvent::Updated { id: id.to_string() });
        Ok(updated)
    }

    /// Delete a definition. Returns whether anything was removed; fails if
    /// the target is a system definition.
    pub fn remove(&mut self, id: &str) -> Result<bool, CoreError> {
        match self.themes.get(id) {
            None => Ok(false),
            Some(definition) if definition.is_system => {
                Err(CoreError::SystemThemeImmutable { id: id.to_string() })
            }
            Some(_) => {
                self.themes.remove(id);
                self.emit(&ThemeEvent::Removed { id: id.to_string() });
                Ok(true)
            }
        }
    }

    // -- Definition lookups --------------------------------------------------

    pub fn get(&self, id: &str) -> Option<&ThemeDefinition> {
        self.themes.get(id)
    }

    pub fn has(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    /// All definitions, optionally filtered by layer tag, sorted by id.
    pub fn get_all(&self, layer: Option<ThemeLayerKind>) -> Vec<&ThemeDefinition> {
        let mut definitions: Vec<&ThemeDefinition> = self
            .themes
            .values()
            .filter(|d| layer.is_none_or(|l| d.layer == l))
            .collect();
        definitions.sort_by(|a, b| a.id.cmp(&b.id));
        definitions
    }

    pub fn get_system_themes(&self) -> Vec<&ThemeDefinition> {
        let mut definitions: Vec<&ThemeDefinition> =
            self.themes.values().filter(|d| d.is_system).collect();
        definitions.sort_by(|a, b| a.id.cmp(&b.id));
        definitions
    }

    pub fn get_custom_themes(&self) -> Vec<&ThemeDefinition> {
        let mut definitions: Vec<&ThemeDefinition> =
            self.themes.values().filter(|d| !d.is_system).collect();
        definitions.sort_by(|a, b| a.id.cmp(&b.id));
        definitions
    }

    // -- Tenant configuration ------------------------------------------------

    /// Upsert a tenant configuration, stamping a fresh `updated_at`.
    pub fn set_tenant_config(&mut self, mut config: TenantThemeConfig) -> TenantThemeConfig {
        config.updated_at = chrono::Utc::now();
        let tenant_id = config.tenant_id.clone();
        self.tenants.insert(tenant_id.clone(), config.clone());
        self.emit(&ThemeEvent::TenantConfigUpdated { tenant_id });
        config
    }

    pub fn get_tenant_config(&self, tenant_id: &str) -> Option<&TenantThemeConfig> {
        self.tenants.get(tenant_id)
    }

    /// Remove a tenant's record entirely. Returns whether it existed.
    pub fn remove_tenant_config(&mut self, tenant_id: &str) -> bool {
        self.tenants.remove(tenant_id).is_some()
    }

    pub fn get_all_tenant_configs(&self) -> Vec<&TenantThemeConfig> {
        let mut configs: Vec<&TenantThemeConfig> = self.tenants.values().collect();
        configs.sort_by(|a, b| a.tenant_id.cmp(&b.tenant_id));
        configs
    }

    // -- Bundles -------------------------------------------------------------

    /// Bulk-import definitions, skipping (not overwriting) any id already
    /// held by a system definition. Imported definitions are stored as
    /// non-system regardless of what the bundle claims. Returns the count
    /// actually inserted.
    pub fn load_bundle(&mut self, definitions: Vec<ThemeDefinition>) -> usize {
        let mut imported = 0;
        for mut definition in definitions {
            if self
                .themes
                .get(&definition.id)
                .is_some_and(|existing| existing.is_system)
            {
                continue;
            }
            definition.is_system = false;
            self.themes.insert(definition.id.clone(), definition);
            imported += 1;
        }
        imported
    }

    /// Export all non-system definitions plus all tenant configs.
    ///
    /// System themes are excluded: they are reconstructible from code.
    pub fn export_bundle(&self) -> ThemeBundle {
        ThemeBundle {
            themes: self.get_custom_themes().into_iter().cloned().collect(),
            tenants: self.get_all_tenant_configs().into_iter().cloned().collect(),
        }
    }

    // -- Diagnostics ---------------------------------------------------------

    pub fn get_stats(&self) -> RegistryStats {
        let system_themes = self.themes.values().filter(|d| d.is_system).count();
        let mut themes_by_layer: BTreeMap<String, usize> = BTreeMap::new();
        for definition in self.themes.values() {
            *themes_by_layer
                .entry(definition.layer.as_str().to_string())
                .or_insert(0) += 1;
        }

        RegistryStats {
            total_themes: self.themes.len(),
            system_themes,
            custom_themes: self.themes.len() - system_themes,
            themes_by_layer,
            tenant_configs: self.tenants.len(),
            initialized: self.initialized,
        }
    }

    // -- Events --------------------------------------------------------------

    /// Register a lifecycle listener; returns the handle to unsubscribe.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriberId
    where
        F: Fn(&ThemeEvent) + Send + Sync + 'static,
    {
        self.next_subscriber += 1;
        let id = SubscriberId(self.next_subscriber);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Notify all listeners synchronously. A panicking listener is logged
    /// and swallowed; events are a side notification, not part of the
    /// mutation's success contract.
    fn emit(&self, event: &ThemeEvent) {
        for (id, listener) in &self.listeners {
            if catch_unwind(AssertUnwindSafe(|| listener(event))).is_err() {
                tracing::warn!(
                    event = event.name(),
                    subscriber = id.0,
                    "theme event listener panicked; continuing"
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use assert_matches::assert_matches;

    use super::*;
    use crate::tokens::ThemeLayer;

    fn custom(id: &str) -> ThemeDefinition {
        ThemeDefinition::new(id, "Custom", ThemeLayerKind::Tenant, ThemeLayer::default())
    }

    // -- Seeding --

    #[test]
    fn new_registry_is_seeded_with_system_defaults() {
        let registry = ThemeRegistry::new();

        assert!(registry.has("base:light"));
        assert!(registry.has("role:operator"));
        assert!(registry.has("env:factory-floor"));
        assert!(registry.has("compliance:audit-mode"));

        let stats = registry.get_stats();
        assert!(stats.initialized);
        assert_eq!(stats.custom_themes, 0);
        assert_eq!(stats.total_themes, stats.system_themes);
    }

    #[test]
    fn explicit_reseed_is_idempotent_and_preserves_custom_themes() {
        let mut registry = ThemeRegistry::new();
        let before = registry.get_stats();

        registry.register(custom("custom:acme")).unwrap();
        registry.load_system_defaults();

        let after = registry.get_stats();
        assert_eq!(after.system_themes, before.system_themes);
        assert!(registry.has("custom:acme"));
    }

    // -- System immutability --

    #[test]
    fn register_over_system_id_fails() {
        let mut registry = ThemeRegistry::new();
        let colliding = ThemeDefinition::new(
            "role:operator",
            "Imposter",
            ThemeLayerKind::Role,
            ThemeLayer::default(),
        );

        let err = registry.register(colliding).unwrap_err();
        assert_matches!(err, CoreError::SystemThemeImmutable { id } if id == "role:operator");
    }

    #[test]
    fn update_of_system_definition_fails() {
        let mut registry = ThemeRegistry::new();
        let err = registry
            .update("compliance:standard", UpdateThemeDefinition::default())
            .unwrap_err();
        assert_matches!(err, CoreError::SystemThemeImmutable { .. });
    }

    #[test]
    fn remove_of_system_definition_fails() {
        let mut registry = ThemeRegistry::new();
        let err = registry.remove("base:light").unwrap_err();
        assert_matches!(err, CoreError::SystemThemeImmutable { .. });
        assert!(registry.has("base:light"));
    }

    // -- Custom definition lifecycle --

    #[test]
    fn custom_theme_round_trip() {
        let mut registry = ThemeRegistry::new();
        let definition = custom("custom:acme");

        registry.register(definition.clone()).unwrap();

        assert_eq!(registry.get("custom:acme"), Some(&definition));
        assert!(registry
            .export_bundle()
            .themes
            .iter()
            .any(|d| d.id == "custom:acme"));
        assert!(!registry
            .get_system_themes()
            .iter()
            .any(|d| d.id == "custom:acme"));
        assert!(registry
            .get_custom_themes()
            .iter()
            .any(|d| d.id == "custom:acme"));
    }

    #[test]
    fn register_rejects_user_layer_and_empty_fields() {
        let mut registry = ThemeRegistry::new();

        let user_layer =
            ThemeDefinition::new("custom:x", "X", ThemeLayerKind::User, ThemeLayer::default());
        assert_matches!(registry.register(user_layer), Err(CoreError::Validation(_)));

        let empty_id = ThemeDefinition::new("", "X", ThemeLayerKind::Base, ThemeLayer::default());
        assert_matches!(registry.register(empty_id), Err(CoreError::Validation(_)));
    }

    #[test]
    fn update_shallow_merges_the_record() {
        let mut registry = ThemeRegistry::new();
        registry.register(custom("custom:acme")).unwrap();

        let updated = registry
            .update(
                "custom:acme",
                UpdateThemeDefinition {
                    name: Some("Renamed".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        // Unspecified fields survive.
        assert_eq!(updated.layer, ThemeLayerKind::Tenant);
    }

    #[test]
    fn update_of_missing_definition_is_not_found() {
        let mut registry = ThemeRegistry::new();
        let err = registry
            .update("custom:ghost", UpdateThemeDefinition::default())
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound { .. });
    }

    #[test]
    fn remove_returns_whether_anything_was_removed() {
        let mut registry = ThemeRegistry::new();
        registry.register(custom("custom:acme")).unwrap();

        assert!(registry.remove("custom:acme").unwrap());
        assert!(!registry.remove("custom:acme").unwrap());
    }

    #[test]
    fn get_all_filters_by_layer() {
        let registry = ThemeRegistry::new();
        let roles = registry.get_all(Some(ThemeLayerKind::Role));

        assert!(!roles.is_empty());
        assert!(roles.iter().all(|d| d.layer == ThemeLayerKind::Role));
    }

    // -- Bundles --

    #[test]
    fn load_bundle_skips_system_ids_and_strips_system_flag() {
        let mut registry = ThemeRegistry::new();

        let mut smuggled = custom("custom:pack");
        smuggled.is_system = true;
        let colliding = custom("base:light");

        let imported = registry.load_bundle(vec![smuggled, colliding]);

        assert_eq!(imported, 1);
        assert!(!registry.get("custom:pack").unwrap().is_system);
        // The system definition at the colliding id is untouched.
        assert!(registry.get("base:light").unwrap().is_system);
    }

    #[test]
    fn export_bundle_excludes_system_definitions() {
        let mut registry = ThemeRegistry::new();
        registry.register(custom("custom:acme")).unwrap();

        let bundle = registry.export_bundle();
        assert_eq!(bundle.themes.len(), 1);
        assert!(bundle.themes.iter().all(|d| !d.is_system));
    }

    // -- Tenant config --

    #[test]
    fn tenant_config_upsert_stamps_updated_at() {
        use crate::tokens::BrandingOverlay;

        let mut registry = ThemeRegistry::new();
        let config = TenantThemeConfig {
            tenant_id: "acme".into(),
            branding: BrandingOverlay {
                name: Some("Acme Industrial".into()),
                ..Default::default()
            },
            colors: None,
            typography: None,
            role_themes: Default::default(),
            default_base_theme: None,
            default_environment: None,
            allowed_compliance_modes: None,
            updated_at: chrono::DateTime::UNIX_EPOCH,
        };

        let stored = registry.set_tenant_config(config);
        assert!(stored.updated_at > chrono::DateTime::UNIX_EPOCH);
        assert!(registry.get_tenant_config("acme").is_some());

        assert!(registry.remove_tenant_config("acme"));
        assert!(!registry.remove_tenant_config("acme"));
    }

    // -- Events --

    #[test]
    fn mutations_emit_lifecycle_events() {
        let mut registry = ThemeRegistry::new();
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        registry.subscribe(move |event| {
            sink.lock().unwrap().push(event.name().to_string());
        });

        registry.register(custom("custom:acme")).unwrap();
        registry
            .update("custom:acme", UpdateThemeDefinition::default())
            .unwrap();
        registry.remove("custom:acme").unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["theme:registered", "theme:updated", "theme:removed"]
        );
    }

    #[test]
    fn panicking_listener_does_not_abort_the_mutation() {
        let mut registry = ThemeRegistry::new();
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        registry.subscribe(|_| panic!("faulty subscriber"));
        let sink = Arc::clone(&seen);
        registry.subscribe(move |event| {
            sink.lock().unwrap().push(event.name().to_string());
        });

        registry.register(custom("custom:acme")).unwrap();

        assert!(registry.has("custom:acme"));
        assert_eq!(*seen.lock().unwrap(), vec!["theme:registered"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut registry = ThemeRegistry::new();
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let id = registry.subscribe(move |event| {
            sink.lock().unwrap().push(event.name().to_string());
        });

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));

        registry.register(custom("custom:acme")).unwrap();
        assert!(seen.lock().unwrap().is_empty());
    }
}
