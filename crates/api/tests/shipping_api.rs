//! HTTP-level integration tests for the `/shipping` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json};
use serde_json::{json, Value};

/// Three branches: 9 sized employees (3 boxes), 2 employees (1 box, packaged),
/// and an empty branch (1 empty box). One orphan employee lacks a branch id.
fn snapshot() -> Value {
    let mut employees: Vec<Value> = (0..9)
        .map(|i| json!({ "id": 100 + i, "branch_id": 1, "safety_size": "M" }))
        .collect();
    employees.push(json!({
        "id": 200,
        "sucursal_id": 2,
        "talla": "L",
        "requiere_playera_administrativa": true,
        "talla_administrativa": "S"
    }));
    employees.push(json!({ "id": 201, "branch_id": 2, "safety_size": "Por definir" }));
    employees.push(json!({ "id": 300, "safety_size": "XL" }));

    json!({
        "branches": [
            { "id": 1, "name": "Centro", "manager": "Luis", "zone": "Norte" },
            { "id": 2, "nombre": "Sur", "is_empaquetado": true, "numero_seguimiento": "TRK-2" },
            { "id": 3, "name": "Valle" }
        ],
        "employees": employees
    })
}

fn with(mut base: Value, key: &str, value: Value) -> Value {
    base[key] = value;
    base
}

#[tokio::test]
async fn generates_one_label_per_box() {
    let response = post_json(build_test_app(), "/api/v1/shipping/labels", snapshot()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["box_count"], 5);
    assert_eq!(data["page_count"], 2);
    assert_eq!(data["branch_count"], 3);
    assert_eq!(data["skipped_employees"], 1);
    assert_eq!(data["nothing_to_generate"], false);
    assert!(data["file_name"].as_str().unwrap().starts_with("shipping_labels_"));

    let slots = data["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 5);
    assert_eq!(slots[1]["payload"]["content"]["box_label"], "Box 2/3");
    assert_eq!(slots[3]["payload"]["branch"]["tracking_number"], "TRK-2");
    assert_eq!(slots[4]["page_index"], 1);
    assert_eq!(slots[4]["row_index"], 0);
    assert_eq!(slots[4]["column_index"], 0);
    assert_eq!(slots[4]["payload"]["shipment_box"]["units_in_this_box"], 0);

    let sur = &data["branch_plans"][1]["summary"];
    assert_eq!(sur["safety_garment_total"], 1);
    assert_eq!(sur["admin_garment_by_size"]["S"], 3);
}

#[tokio::test]
async fn packaged_filter_selects_only_packaged_branches() {
    let body = with(snapshot(), "filter", json!("packaged"));
    let response = post_json(build_test_app(), "/api/v1/shipping/labels", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["branch_count"], 1);
    assert_eq!(json["data"]["slots"][0]["payload"]["branch"]["id"], 2);
}

#[tokio::test]
async fn null_flags_are_read_as_false() {
    let body = json!({
        "branches": [
            { "id": 1, "nombre": "Centro", "manager": null, "is_empaquetado": null }
        ],
        "employees": [
            { "id": 1, "sucursal_id": 1, "talla": "M", "requiere_playera_administrativa": null }
        ],
        "filter": "pending"
    });
    let response = post_json(build_test_app(), "/api/v1/shipping/labels", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["branch_count"], 1);
    let summary = &json["data"]["branch_plans"][0]["summary"];
    assert_eq!(summary["safety_garment_total"], 3);
    assert_eq!(summary["admin_garment_total"], 0);
}

#[tokio::test]
async fn empty_selection_reports_nothing_to_generate() {
    let body = json!({ "branches": [{ "id": 1, "name": "Centro" }], "filter": "packaged" });
    let response = post_json(build_test_app(), "/api/v1/shipping/labels", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["nothing_to_generate"], true);
    assert_eq!(json["data"]["page_count"], 0);
}

#[tokio::test]
async fn dense_grid_override_fits_one_page() {
    let body = with(snapshot(), "slots_per_column", json!(4));
    let response = post_json(build_test_app(), "/api/v1/shipping/labels", body).await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["page_count"], 1);
}

#[tokio::test]
async fn zero_capacity_is_rejected() {
    let body = with(snapshot(), "capacity_per_box", json!(0));
    let response = post_json(build_test_app(), "/api/v1/shipping/labels", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_size_is_rejected_at_the_boundary() {
    let body = json!({
        "branches": [{ "id": 1, "name": "Centro" }],
        "employees": [{ "id": 1, "branch_id": 1, "safety_size": "XXXXL" }]
    });
    let response = post_json(build_test_app(), "/api/v1/shipping/labels", body).await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn preview_matches_generation_counts() {
    let response = post_json(build_test_app(), "/api/v1/shipping/preview", snapshot()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["mode_counts"]["all"], 3);
    assert_eq!(data["mode_counts"]["pending"], 2);
    assert_eq!(data["mode_counts"]["packaged"], 1);
    assert_eq!(data["box_count"], 5);
    assert_eq!(data["page_count"], 2);
    assert_eq!(data["slots_per_page"], 4);
}

#[tokio::test]
async fn repeated_generation_yields_identical_slots() {
    let first =
        body_json(post_json(build_test_app(), "/api/v1/shipping/labels", snapshot()).await).await;
    let second =
        body_json(post_json(build_test_app(), "/api/v1/shipping/labels", snapshot()).await).await;
    assert_eq!(first["data"]["slots"], second["data"]["slots"]);
}
