//! Route definitions for the theme engine, mounted at `/themes`.
//!
//! ```text
//! POST   /resolve                 -> resolve_theme
//! GET    /available               -> available_themes
//! POST   /preview                 -> preview_theme
//! GET    /definitions             -> list_definitions
//! POST   /definitions             -> create_definition
//! GET    /definitions/{id}        -> get_definition
//! PUT    /definitions/{id}        -> update_definition
//! DELETE /definitions/{id}        -> delete_definition
//! GET    /tenants/{tenant_id}     -> get_tenant_config
//! PUT    /tenants/{tenant_id}     -> upsert_tenant_config
//! DELETE /tenants/{tenant_id}     -> delete_tenant_config
//! POST   /bundle/import           -> import_bundle
//! GET    /bundle/export           -> export_bundle
//! GET    /stats                   -> stats
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{tenants, themes};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/resolve", post(themes::resolve_theme))
        .route("/available", get(themes::available_themes))
        .route("/preview", post(themes::preview_theme))
        .route(
            "/definitions",
            get(themes::list_definitions).post(themes::create_definition),
        )
        .route(
            "/definitions/{id}",
            get(themes::get_definition)
                .put(themes::update_definition)
                .delete(themes::delete_definition),
        )
        .route(
            "/tenants/{tenant_id}",
            get(tenants::get_tenant_config)
                .put(tenants::upsert_tenant_config)
                .delete(tenants::delete_tenant_config),
        )
        .route("/bundle/import", post(themes::import_bundle))
        .route("/bundle/export", get(themes::export_bundle))
        .route("/stats", get(themes::stats))
}
