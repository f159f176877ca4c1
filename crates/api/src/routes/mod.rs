pub mod health;
pub mod themes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /themes/resolve                     resolve a context (POST, auth)
/// /themes/available                   selectable themes per layer (GET, auth)
/// /themes/preview                     resolve + ad-hoc overlay (POST, admin)
///
/// /themes/definitions                 list, register (GET auth, POST admin)
/// /themes/definitions/{id}            get, update, delete (GET auth, PUT/DELETE admin)
///
/// /themes/tenants/{tenant_id}         get, upsert, delete tenant config (admin)
///
/// /themes/bundle/import               import a theme pack (POST, admin)
/// /themes/bundle/export               export non-system state (GET, admin)
///
/// /themes/stats                       registry diagnostics (GET, admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Theme engine: resolution, definitions, tenant config, bundles.
        .nest("/themes", themes::router())
}
