mod common;

use axum::{body::Body, http::Request};
use axum::http::StatusCode;
use common::*;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn put_json(app: &TestApp, uri: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("PUT").uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

async fn delete(app: &TestApp, uri: &str) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(uri)
            .body(Body::empty()).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let res = get(&app, "/health").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "ok");
}

#[tokio::test]
async fn test_service_crud_and_ordering() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/services", json!({
        "name": "Lifting de Pestañas",
        "price": 30,
        "duration": "45 min",
        "category": "Lifting y Cejas",
        "sort_order": 2
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let second = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = post_json(&app, "/api/v1/services", json!({
        "name": "Limpieza de Cutis Profunda",
        "price": 45,
        "duration": "60 min",
        "category": "Tratamiento Facial",
        "sort_order": 1
    })).await;
    let first = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = get(&app, "/api/v1/services").await;
    let services = parse_body(res).await;
    let listed: Vec<&str> = services.as_array().unwrap().iter().map(|s| s["id"].as_str().unwrap()).collect();
    assert_eq!(listed, vec![first.as_str(), second.as_str()]);

    let res = put_json(&app, &format!("/api/v1/services/{}", first), json!({"price": 50})).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["price"], 50);

    let res = delete(&app, &format!("/api/v1/services/{}", second)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = get(&app, "/api/v1/services").await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_service_validation() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/services", json!({
        "name": "  ",
        "price": 30,
        "duration": "45 min",
        "category": "Lifting y Cejas"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = post_json(&app, "/api/v1/services", json!({
        "name": "Lifting",
        "price": -5,
        "duration": "45 min",
        "category": "Lifting y Cejas"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_team_and_blocks() {
    let app = TestApp::new().await;
    let pro = seed_team_member(&app, "Lucía").await;
    let date = next_open_date();

    let res = post_json(&app, "/api/v1/blocks", json!({
        "professional_id": pro,
        "date": date
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let block_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    // One block per professional per day.
    let res = post_json(&app, "/api/v1/blocks", json!({
        "professional_id": pro,
        "date": date
    })).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Blocking an unknown professional is refused.
    let res = post_json(&app, "/api/v1/blocks", json!({
        "professional_id": "ghost",
        "date": date
    })).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = get(&app, "/api/v1/blocks").await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 1);

    let res = delete(&app, &format!("/api/v1/blocks/{}", block_id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = get(&app, "/api/v1/blocks").await;
    assert!(parse_body(res).await.as_array().unwrap().is_empty());

    let res = delete(&app, &format!("/api/v1/team/{}", pro)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = get(&app, "/api/v1/team").await;
    assert!(parse_body(res).await.as_array().unwrap().is_empty());
}
