//! HTTP surface tests against in-memory fixtures

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use desa_api::{create_router, AppState};
use desa_core::formats::BoundaryProperties;
use desa_core::geo::{FallbackVillage, GeometryStore, ResolverOptions};
use desa_store::memory::MemoryVillageStore;
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARIES: &str = r#"{
    "type": "FeatureCollection",
    "features": [{
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[112.0, -7.5], [112.1, -7.5], [112.1, -7.4], [112.0, -7.4], [112.0, -7.5]]]
        },
        "properties": { "iddesa": "3524012015", "nmdesa": "Kemlagi Lor" }
    }]
}"#;

const VILLAGES: &str = r#"[
    {
        "_id": "3524012015",
        "name": "Kemlagi Lor",
        "district": "Kemlagi",
        "latitude": -7.45,
        "longitude": 112.05,
        "health": { "jumlah_dokter": 2, "jumlah_bidan": 5, "jumlah_puskesmas": 1 },
        "disease": { "infectious_cases": 20 },
        "education": { "sd_counts": 100, "smp_counts": 10, "sma_counts": 5 },
        "criminal": { "suicide_count_man": 1, "murderer_case_woman": 0 },
        "social": { "mosque": 4, "musala": 12, "migran_woman": 30, "pub": "Tidak Ada" },
        "security": { "pelaporan": "Ada", "linmas": 18 },
        "sanitasi": { "sampah": "Dibakar", "bank_sampah": "Ada", "pencemaran_air": "Tidak Ada" }
    },
    {
        "_id": "3524020002",
        "name": "Japan",
        "district": "Sooko",
        "latitude": -7.0,
        "longitude": 113.0
    }
]"#;

fn app_with(options: ResolverOptions, villages: &str) -> Router {
    let (store, _) =
        GeometryStore::from_geojson_str(BOUNDARIES, BoundaryProperties::default()).unwrap();
    let villages = MemoryVillageStore::from_json_str(villages).unwrap();
    let state = AppState::new(
        Arc::new(store),
        options,
        Arc::new(villages),
        Duration::from_secs(300),
    );
    create_router(Arc::new(state))
}

fn app() -> Router {
    app_with(ResolverOptions::default(), VILLAGES)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["boundaries"], 1);
    assert!(body["boundaries_loaded_at"].is_string());
    assert_eq!(body["villages"], 2);
}

#[tokio::test]
async fn test_nearest_village_inside_boundary() {
    let (status, body) = get(app(), "/api/nearest-village?lat=-7.45&long=112.05").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "3524012015");
    assert_eq!(body["method"], "exact");
    assert_eq!(body["distance_km"], 0.0);
}

#[tokio::test]
async fn test_nearest_village_accepts_lon() {
    let (status, body) = get(app(), "/api/nearest-village?lat=-7.45&lon=112.103").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["method"], "fuzzy");
}

#[tokio::test]
async fn test_nearest_village_uses_centroids() {
    let (status, body) = get(app(), "/api/nearest-village?lat=-7.1&long=112.9").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "3524020002");
    assert_eq!(body["method"], "centroid_fallback");
}

#[tokio::test]
async fn test_nearest_village_rejects_bad_coordinates() {
    let (status, body) = get(app(), "/api/nearest-village?lat=95&long=112.0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid coordinate");

    let (status, _) = get(app(), "/api/nearest-village?lat=abc&long=112.0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(app(), "/api/nearest-village?lat=-7.0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nearest_village_unresolved_is_not_found() {
    let app = app_with(ResolverOptions::default(), "[]");
    let (status, body) = get(app, "/api/nearest-village?lat=-1.0&long=100.0").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_nearest_village_configured_fallback() {
    let options = ResolverOptions {
        fallback: Some(FallbackVillage {
            id: "3524012015".to_string(),
            name: "Kemlagi Lor (Fallback)".to_string(),
        }),
        ..Default::default()
    };
    let (status, body) =
        get(app_with(options, "[]"), "/api/nearest-village?lat=-1.0&long=100.0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["method"], "error_fallback");
    assert_eq!(body["name"], "Kemlagi Lor (Fallback)");
}

#[tokio::test]
async fn test_micro_profile() {
    let (status, body) = get(app(), "/api/micro/3524012015").await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["name"], "Kemlagi Lor");
    assert_eq!(data["stats"]["doctors"], 2);
    assert_eq!(data["stats"]["schools"], 100);
    assert_eq!(data["stats"]["signal"], "Unknown");

    let analytics = &data["analytics"];
    assert_eq!(analytics["health_radar"]["supply"], 16);
    assert_eq!(analytics["health_radar"]["demand"], 20);
    assert_eq!(analytics["health_radar"]["status"], "High Risk");
    assert_eq!(analytics["education_funnel"]["ratio"], 0.15);
    assert_eq!(analytics["education_funnel"]["status"], "Dropout Risk Zone");
    assert_eq!(analytics["independence_index"]["grade"], "Incomplete Data");

    assert_eq!(data["criminal"]["suicide_count_man"], 1);
    assert_eq!(data["social"]["prayer_room"], 12);
    assert_eq!(data["social"]["migrant_woman"], 30);
    assert_eq!(data["social"]["pub"], "Tidak Ada");
    assert_eq!(data["security"]["reporting"], "Ada");
    assert_eq!(data["security"]["linmas"], 18);
    assert_eq!(data["sanitation"]["waste_disposal"], "Dibakar");
    assert_eq!(data["sanitation"]["water_pollution"], "Tidak Ada");
}

#[tokio::test]
async fn test_micro_unknown_village() {
    let (status, body) = get(app(), "/api/micro/0000000000").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Village not found");
}

#[tokio::test]
async fn test_macro_view() {
    let (status, body) = get(app(), "/api/macro").await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["health_radar"]["status"], "High Risk");
    assert_eq!(data[1]["health_radar"]["status"], "Unknown");
    assert_eq!(data[1]["education_funnel"]["status"], "Unknown");

    assert_eq!(data[0]["criminal"]["suicide_count_man"], 1);
    assert_eq!(data[0]["social"]["mosque"], 4);
    assert_eq!(data[0]["security"]["linmas"], 18);
    assert_eq!(data[0]["sanitation"]["waste_bank"], "Ada");
    assert!(data[1]["criminal"].is_null());
    assert!(data[1]["sanitation"].is_null());
}

#[tokio::test]
async fn test_village_without_coordinates() {
    let villages = r#"[
        { "_id": "3524030003", "name": "Tanpa Titik", "district": "Sooko" },
        { "_id": "3524020002", "name": "Japan", "latitude": -7.0, "longitude": 113.0 }
    ]"#;

    let (status, body) =
        get(app_with(ResolverOptions::default(), villages), "/api/macro").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"][0]["latitude"].is_null());
    assert!(body["data"][0]["longitude"].is_null());

    let app = app_with(ResolverOptions::default(), villages);
    let (status, body) = get(app, "/api/nearest-village?lat=-1.0&long=100.0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "3524020002");
    assert_eq!(body["method"], "centroid_fallback");
}

#[tokio::test]
async fn test_boundaries() {
    let (status, body) = get(app(), "/api/boundaries").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "FeatureCollection");
    assert_eq!(body["features"][0]["properties"]["iddesa"], "3524012015");
}
