//! Handlers for the theme engine: resolution, previews, definition CRUD,
//! bundle import/export, and diagnostics.
//!
//! Resolution endpoints are open to any authenticated user; everything that
//! mutates the registry or inspects it wholesale is admin only.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use factoryos_core::definition::{
    CreateThemeDefinition, ThemeDefinition, ThemeLayerKind, UpdateThemeDefinition,
};
use factoryos_core::error::CoreError;
use factoryos_core::registry::{RegistryStats, ThemeBundle};
use factoryos_core::resolver::{
    AvailableThemes, ResolvedTheme, ThemeResolutionContext, ThemeResolver,
};
use factoryos_core::tokens::ThemeLayer;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ThemeResponse {
    success: bool,
    theme: ResolvedTheme,
}

#[derive(Debug, Serialize)]
struct DefinitionResponse {
    success: bool,
    definition: ThemeDefinition,
}

#[derive(Debug, Serialize)]
struct DefinitionListResponse {
    success: bool,
    definitions: Vec<ThemeDefinition>,
    count: usize,
}

#[derive(Debug, Serialize)]
struct AvailableResponse {
    success: bool,
    #[serde(flatten)]
    available: AvailableThemes,
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    success: bool,
    stats: RegistryStats,
}

#[derive(Debug, Serialize)]
struct ImportResponse {
    success: bool,
    imported: usize,
    message: String,
}

// ---------------------------------------------------------------------------
// Resolution endpoints
// ---------------------------------------------------------------------------

/// POST /api/v1/themes/resolve
///
/// Resolve the caller's context into a composed token set. The cache key is
/// echoed as the response `ETag` so clients can revalidate cheaply; the core
/// itself never caches.
pub async fn resolve_theme(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(context): Json<ThemeResolutionContext>,
) -> AppResult<impl IntoResponse> {
    if context.base_theme.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "base_theme is required".into(),
        )));
    }

    let registry = state.read_registry()?;
    let theme = ThemeResolver::new(&registry).resolve(&context);
    drop(registry);

    tracing::debug!(
        user_id = %user.user_id,
        cache_key = %theme.cache_key,
        layers = theme.applied_layers.len(),
        "Theme resolved",
    );

    let headers = [
        (header::ETAG, format!("\"{}\"", theme.cache_key)),
        (header::CACHE_CONTROL, "private, max-age=300".to_string()),
    ];

    Ok((
        headers,
        Json(ThemeResponse {
            success: true,
            theme,
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct AvailableQuery {
    pub tenant_id: Option<String>,
}

/// GET /api/v1/themes/available
///
/// List the themes the caller may select per layer. The role comes from the
/// authenticated principal; the tenant from the query string, falling back
/// to the principal's own tenant.
pub async fn available_themes(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<AvailableQuery>,
) -> AppResult<impl IntoResponse> {
    let context = ThemeResolutionContext {
        tenant_id: query.tenant_id.or(user.tenant_id),
        role: Some(user.role),
        ..Default::default()
    };

    let registry = state.read_registry()?;
    let available = ThemeResolver::new(&registry).available_themes(&context);

    Ok(Json(AvailableResponse {
        success: true,
        available,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub context: ThemeResolutionContext,
    #[serde(default)]
    pub additional_layer: Option<ThemeLayer>,
}

/// POST /api/v1/themes/preview
///
/// Resolve a context and optionally overlay one extra ad-hoc layer on top of
/// the result, without persisting anything.
pub async fn preview_theme(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> AppResult<impl IntoResponse> {
    if request.context.base_theme.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "context.base_theme is required".into(),
        )));
    }

    let registry = state.read_registry()?;
    let theme =
        ThemeResolver::new(&registry).preview(&request.context, request.additional_layer.as_ref());

    Ok(Json(ThemeResponse {
        success: true,
        theme,
    }))
}

// ---------------------------------------------------------------------------
// Definition endpoints
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DefinitionsQuery {
    pub layer: Option<ThemeLayerKind>,
}

/// GET /api/v1/themes/definitions
///
/// List registered definitions, optionally filtered by layer tag.
pub async fn list_definitions(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<DefinitionsQuery>,
) -> AppResult<impl IntoResponse> {
    let registry = state.read_registry()?;
    let definitions: Vec<ThemeDefinition> = registry
        .get_all(query.layer)
        .into_iter()
        .cloned()
        .collect();

    let count = definitions.len();
    Ok(Json(DefinitionListResponse {
        success: true,
        definitions,
        count,
    }))
}

/// GET /api/v1/themes/definitions/{id}
pub async fn get_definition(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let registry = state.read_registry()?;
    let definition = registry
        .get(&id)
        .cloned()
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ThemeDefinition",
            id,
        }))?;

    Ok(Json(DefinitionResponse {
        success: true,
        definition,
    }))
}

/// POST /api/v1/themes/definitions
///
/// Register a new custom definition. Colliding with a system id is a 400.
pub async fn create_definition(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateThemeDefinition>,
) -> AppResult<impl IntoResponse> {
    let definition: ThemeDefinition = input.into();
    state.write_registry()?.register(definition.clone())?;

    tracing::info!(
        theme_id = %definition.id,
        layer = %definition.layer,
        user_id = %admin.user_id,
        "Theme definition registered",
    );

    Ok((
        StatusCode::CREATED,
        Json(DefinitionResponse {
            success: true,
            definition,
        }),
    ))
}

/// PUT /api/v1/themes/definitions/{id}
///
/// Partially update a custom definition. System targets are a 400.
pub async fn update_definition(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateThemeDefinition>,
) -> AppResult<impl IntoResponse> {
    let definition = state.write_registry()?.update(&id, patch)?;

    tracing::info!(theme_id = %id, user_id = %admin.user_id, "Theme definition updated");

    Ok(Json(DefinitionResponse {
        success: true,
        definition,
    }))
}

/// DELETE /api/v1/themes/definitions/{id}
///
/// Delete a custom definition. System targets are a 400; unknown ids a 404.
pub async fn delete_definition(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let removed = state.write_registry()?.remove(&id)?;

    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ThemeDefinition",
            id,
        }));
    }

    tracing::info!(theme_id = %id, user_id = %admin.user_id, "Theme definition removed");

    Ok(Json(MessageResponse::ok(format!(
        "Theme definition '{id}' removed"
    ))))
}

// ---------------------------------------------------------------------------
// Bundle endpoints
// ---------------------------------------------------------------------------

/// POST /api/v1/themes/bundle/import
///
/// Bulk-import a theme pack: definitions (system collisions skipped) plus
/// tenant configurations (upserted). Used for offline/on-prem installs.
pub async fn import_bundle(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(bundle): Json<ThemeBundle>,
) -> AppResult<impl IntoResponse> {
    let tenant_count = bundle.tenants.len();
    let theme_count;
    {
        let mut registry = state.write_registry()?;
        theme_count = registry.load_bundle(bundle.themes);
        for tenant in bundle.tenants {
            registry.set_tenant_config(tenant);
        }
    }

    tracing::info!(
        themes = theme_count,
        tenants = tenant_count,
        user_id = %admin.user_id,
        "Theme bundle imported",
    );

    Ok(Json(ImportResponse {
        success: true,
        imported: theme_count + tenant_count,
        message: format!(
            "Imported {theme_count} theme definitions and {tenant_count} tenant configurations"
        ),
    }))
}

/// GET /api/v1/themes/bundle/export
///
/// Download all non-system definitions and tenant configs as a JSON bundle.
/// System themes are excluded; they are reconstructible from code.
pub async fn export_bundle(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bundle = state.read_registry()?.export_bundle();

    let headers = [(
        header::CONTENT_DISPOSITION,
        "attachment; filename=\"theme-bundle.json\"".to_string(),
    )];

    Ok((headers, Json(bundle)))
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// GET /api/v1/themes/stats
pub async fn stats(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = state.read_registry()?.get_stats();

    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}
