//! Handlers for per-tenant theme configuration (admin only).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use factoryos_core::error::CoreError;
use factoryos_core::tenant::{TenantThemeConfig, UpsertTenantThemeConfig};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct TenantConfigResponse {
    success: bool,
    config: TenantThemeConfig,
}

/// GET /api/v1/themes/tenants/{tenant_id}
pub async fn get_tenant_config(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(tenant_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let registry = state.read_registry()?;
    let config = registry
        .get_tenant_config(&tenant_id)
        .cloned()
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TenantThemeConfig",
            id: tenant_id,
        }))?;

    Ok(Json(TenantConfigResponse {
        success: true,
        config,
    }))
}

/// PUT /api/v1/themes/tenants/{tenant_id}
///
/// Create or replace the tenant's theme configuration. `branding.name` is
/// required; `updated_at` is stamped by the registry on every upsert.
pub async fn upsert_tenant_config(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(tenant_id): Path<String>,
    Json(input): Json<UpsertTenantThemeConfig>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let config = state
        .write_registry()?
        .set_tenant_config(input.into_config(tenant_id.as_str()));

    tracing::info!(
        tenant_id = %tenant_id,
        user_id = %admin.user_id,
        "Tenant theme configuration updated",
    );

    Ok(Json(TenantConfigResponse {
        success: true,
        config,
    }))
}

/// DELETE /api/v1/themes/tenants/{tenant_id}
pub async fn delete_tenant_config(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(tenant_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let removed = state.write_registry()?.remove_tenant_config(&tenant_id);

    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TenantThemeConfig",
            id: tenant_id,
        }));
    }

    tracing::info!(
        tenant_id = %tenant_id,
        user_id = %admin.user_id,
        "Tenant theme configuration removed",
    );

    Ok(Json(MessageResponse::ok(format!(
        "Tenant configuration '{tenant_id}' removed"
    ))))
}
