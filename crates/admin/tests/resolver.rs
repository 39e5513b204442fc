//! Route-resolution states: no id, record found, record missing.

mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use admin::{DetailScreen, Resolution, resolve_entity};
use common::RecordingNavigator;
use domain::models::Athlete;
use gateway::RestGateway;

/// A base URL nothing listens on: any fetch would error, so a passing test
/// proves no fetch was issued.
const UNREACHABLE: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn no_id_resolves_immediately_without_a_fetch() {
    let api: RestGateway<Athlete> = RestGateway::new(UNREACHABLE);
    let mut navigator = RecordingNavigator::default();

    let resolution = resolve_entity(&api, &mut navigator, None).await.unwrap();

    assert!(matches!(resolution, Resolution::NoId));
    assert_eq!(navigator.not_found_redirects, 0);
}

#[tokio::test]
async fn present_id_resolves_to_the_record() {
    let app = Router::new().route(
        "/api/athletes/:id",
        get(|| async { Json(json!({ "id": 5073, "name": "terribly" })) }),
    );
    let api: RestGateway<Athlete> = RestGateway::new(&common::spawn(app).await);
    let mut navigator = RecordingNavigator::default();

    let resolution = resolve_entity(&api, &mut navigator, Some("5073"))
        .await
        .unwrap();

    let detail = DetailScreen::mount(resolution.into_record());
    let record = detail.record.unwrap();
    assert_eq!(record.id(), &5073);
    assert_eq!(record.fields.name.as_deref(), Some("terribly"));
    assert_eq!(navigator.not_found_redirects, 0);
}

#[tokio::test]
async fn missing_record_redirects_to_not_found_exactly_once() {
    let app = Router::new().route("/api/athletes/:id", get(|| async { "" }));
    let api: RestGateway<Athlete> = RestGateway::new(&common::spawn(app).await);
    let mut navigator = RecordingNavigator::default();

    let resolution = resolve_entity(&api, &mut navigator, Some("29834"))
        .await
        .unwrap();

    assert!(matches!(resolution, Resolution::Redirected));
    assert!(resolution.into_record().is_none());
    assert_eq!(navigator.not_found_redirects, 1);
}

#[tokio::test]
async fn unparseable_id_takes_the_not_found_path_without_a_fetch() {
    let api: RestGateway<Athlete> = RestGateway::new(UNREACHABLE);
    let mut navigator = RecordingNavigator::default();

    let resolution = resolve_entity(&api, &mut navigator, Some("not-a-number"))
        .await
        .unwrap();

    assert!(matches!(resolution, Resolution::Redirected));
    assert_eq!(navigator.not_found_redirects, 1);
}

#[tokio::test]
async fn transport_errors_propagate() {
    let app = Router::new().route(
        "/api/athletes/:id",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let api: RestGateway<Athlete> = RestGateway::new(&common::spawn(app).await);
    let mut navigator = RecordingNavigator::default();

    let result = resolve_entity(&api, &mut navigator, Some("5073")).await;

    assert!(result.is_err());
    assert_eq!(navigator.not_found_redirects, 0);
}
