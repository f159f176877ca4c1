//! Integration tests for definition CRUD, system-theme immutability,
//! bundles, and registry stats.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post, put, token_for};

fn custom_definition(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "Acme Operator Theme",
        "description": "High-visibility overrides for Acme operators",
        "layer": "role",
        "tokens": {
            "typography": { "font_scale": 1.4 },
            "colors": { "brand": "#00aa55" }
        }
    })
}

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

#[tokio::test]
async fn definition_mutations_require_the_admin_role() {
    let app = common::build_test_app();
    let operator = token_for("operator", None);

    let create = post(
        app.clone(),
        "/api/v1/themes/definitions",
        Some(&operator),
        custom_definition("custom:op"),
    )
    .await;
    assert_eq!(create.status(), StatusCode::FORBIDDEN);

    let remove = delete(
        app.clone(),
        "/api/v1/themes/definitions/custom:op",
        Some(&operator),
    )
    .await;
    assert_eq!(remove.status(), StatusCode::FORBIDDEN);

    // Reading definitions is open to any authenticated user.
    let list = get(app, "/api/v1/themes/definitions", Some(&operator)).await;
    assert_eq!(list.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// CRUD round-trip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn definition_crud_round_trip() {
    let app = common::build_test_app();
    let admin = token_for("admin", None);

    // Create.
    let created = post(
        app.clone(),
        "/api/v1/themes/definitions",
        Some(&admin),
        custom_definition("custom:acme-operator"),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created_json = body_json(created).await;
    assert_eq!(created_json["definition"]["is_system"], false);

    // Read back.
    let fetched = body_json(
        get(
            app.clone(),
            "/api/v1/themes/definitions/custom:acme-operator",
            Some(&admin),
        )
        .await,
    )
    .await;
    assert_eq!(fetched["definition"]["name"], "Acme Operator Theme");
    assert_eq!(
        fetched["definition"]["tokens"]["typography"]["font_scale"],
        1.4
    );

    // Update.
    let updated = body_json(
        put(
            app.clone(),
            "/api/v1/themes/definitions/custom:acme-operator",
            Some(&admin),
            serde_json::json!({ "name": "Renamed Theme" }),
        )
        .await,
    )
    .await;
    assert_eq!(updated["definition"]["name"], "Renamed Theme");
    // Unspecified fields survive the shallow merge.
    assert_eq!(
        updated["definition"]["tokens"]["colors"]["brand"],
        "#00aa55"
    );

    // Delete.
    let removed = delete(
        app.clone(),
        "/api/v1/themes/definitions/custom:acme-operator",
        Some(&admin),
    )
    .await;
    assert_eq!(removed.status(), StatusCode::OK);

    // Gone.
    let missing = get(
        app,
        "/api/v1/themes/definitions/custom:acme-operator",
        Some(&admin),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_definitions_filters_by_layer() {
    let app = common::build_test_app();
    let token = token_for("supervisor", None);

    let json = body_json(
        get(
            app,
            "/api/v1/themes/definitions?layer=compliance",
            Some(&token),
        )
        .await,
    )
    .await;

    let definitions = json["definitions"].as_array().unwrap();
    assert_eq!(json["count"], definitions.len());
    assert!(!definitions.is_empty());
    assert!(definitions
        .iter()
        .all(|definition| definition["layer"] == "compliance"));
}

#[tokio::test]
async fn registering_a_user_layer_definition_is_rejected() {
    let app = common::build_test_app();
    let admin = token_for("admin", None);

    let response = post(
        app,
        "/api/v1/themes/definitions",
        Some(&admin),
        serde_json::json!({
            "id": "custom:sneaky",
            "name": "Sneaky",
            "layer": "user",
            "tokens": {}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// System-theme immutability
// ---------------------------------------------------------------------------

#[tokio::test]
async fn registering_over_a_system_id_is_a_400() {
    let app = common::build_test_app();
    let admin = token_for("admin", None);

    let response = post(
        app,
        "/api/v1/themes/definitions",
        Some(&admin),
        serde_json::json!({
            "id": "role:operator",
            "name": "Imposter",
            "layer": "role",
            "tokens": {}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "SYSTEM_THEME_IMMUTABLE");
}

#[tokio::test]
async fn updating_a_system_definition_is_a_400() {
    let app = common::build_test_app();
    let admin = token_for("admin", None);

    let response = put(
        app,
        "/api/v1/themes/definitions/compliance:standard",
        Some(&admin),
        serde_json::json!({ "name": "Hijacked" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "SYSTEM_THEME_IMMUTABLE");
}

#[tokio::test]
async fn deleting_a_system_definition_is_a_400() {
    let app = common::build_test_app();
    let admin = token_for("admin", None);

    let response = delete(app.clone(), "/api/v1/themes/definitions/base:light", Some(&admin)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Still there.
    let still_there = get(app, "/api/v1/themes/definitions/base:light", Some(&admin)).await;
    assert_eq!(still_there.status(), StatusCode::OK);
}

#[tokio::test]
async fn deleting_an_unknown_definition_is_a_404() {
    let app = common::build_test_app();
    let admin = token_for("admin", None);

    let response = delete(app, "/api/v1/themes/definitions/custom:ghost", Some(&admin)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Bundles
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bundle_export_round_trips_through_import() {
    let app = common::build_test_app();
    let admin = token_for("admin", None);

    post(
        app.clone(),
        "/api/v1/themes/definitions",
        Some(&admin),
        custom_definition("custom:packaged"),
    )
    .await;
    put(
        app.clone(),
        "/api/v1/themes/tenants/acme",
        Some(&admin),
        serde_json::json!({ "branding": { "name": "Acme Industrial" } }),
    )
    .await;

    // Export contains the custom definition and the tenant, never system
    // themes.
    let export = get(app.clone(), "/api/v1/themes/bundle/export", Some(&admin)).await;
    assert_eq!(export.status(), StatusCode::OK);
    assert!(export
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("attachment"));

    let bundle = body_json(export).await;
    let exported_ids: Vec<&str> = bundle["themes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|definition| definition["id"].as_str().unwrap())
        .collect();
    assert_eq!(exported_ids, vec!["custom:packaged"]);
    assert_eq!(bundle["tenants"][0]["tenant_id"], "acme");

    // Import into a fresh app.
    let fresh = common::build_test_app();
    let imported = body_json(
        post(
            fresh.clone(),
            "/api/v1/themes/bundle/import",
            Some(&admin),
            bundle,
        )
        .await,
    )
    .await;
    assert_eq!(imported["success"], true);
    assert_eq!(imported["imported"], 2);

    let fetched = get(
        fresh,
        "/api/v1/themes/definitions/custom:packaged",
        Some(&admin),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
}

#[tokio::test]
async fn bundle_import_skips_system_collisions() {
    let app = common::build_test_app();
    let admin = token_for("admin", None);

    let json = body_json(
        post(
            app.clone(),
            "/api/v1/themes/bundle/import",
            Some(&admin),
            serde_json::json!({
                "themes": [
                    { "id": "base:light", "name": "Imposter", "layer": "base", "tokens": {} },
                    { "id": "custom:legit", "name": "Legit", "layer": "tenant", "tokens": {} }
                ]
            }),
        )
        .await,
    )
    .await;

    assert_eq!(json["imported"], 1);

    // The system definition is untouched.
    let base = body_json(
        get(app, "/api/v1/themes/definitions/base:light", Some(&admin)).await,
    )
    .await;
    assert_eq!(base["definition"]["is_system"], true);
    assert_eq!(base["definition"]["name"], "Light");
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stats_reports_layer_breakdown_and_counts() {
    let app = common::build_test_app();
    let admin = token_for("admin", None);

    post(
        app.clone(),
        "/api/v1/themes/definitions",
        Some(&admin),
        custom_definition("custom:extra"),
    )
    .await;

    let json = body_json(get(app, "/api/v1/themes/stats", Some(&admin)).await).await;

    assert_eq!(json["success"], true);
    let stats = &json["stats"];
    assert_eq!(stats["custom_themes"], 1);
    assert_eq!(
        stats["total_themes"].as_u64().unwrap(),
        stats["system_themes"].as_u64().unwrap() + 1
    );
    assert!(stats["themes_by_layer"]["compliance"].as_u64().unwrap() >= 3);
}
