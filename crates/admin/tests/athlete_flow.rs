//! Athlete screens end to end against a stub collaborator: create, list,
//! pick-list maintenance, save failure, delete.

mod common;

use std::sync::{Arc, Mutex};

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use uuid::Uuid;

use admin::features::athletes::AthleteUpdateScreen;
use admin::{DeleteDialog, DialogOutcome, ListScreen};
use common::RecordingNavigator;
use domain::models::{Athlete, SessionPackage, SessionPackageRef};
use domain::{Keyed, Persisted};
use gateway::RestGateway;

/// Stub athletes resource backed by a shared in-memory store, plus an empty
/// session-package pick-list endpoint.
fn athletes_app(store: Arc<Mutex<Vec<Value>>>) -> Router {
    let create_store = store.clone();
    let list_store = store.clone();
    let delete_store = store;
    Router::new()
        .route(
            "/api/athletes",
            post(move |Json(body): Json<Value>| {
                let store = create_store.clone();
                async move {
                    let mut store = store.lock().unwrap();
                    let mut created = body;
                    created["id"] = json!(100 + store.len() as i64);
                    store.push(created.clone());
                    (StatusCode::CREATED, Json(created))
                }
            })
            .get(move || {
                let store = list_store.clone();
                async move {
                    let store = store.lock().unwrap();
                    let total = store.len().to_string();
                    ([("x-total-count", total)], Json(store.clone()))
                }
            }),
        )
        .route(
            "/api/athletes/:id",
            delete(move |Path(id): Path<i64>| {
                let store = delete_store.clone();
                async move {
                    store.lock().unwrap().retain(|row| row["id"] != json!(id));
                    StatusCode::NO_CONTENT
                }
            }),
        )
        .route(
            "/api/session-packages",
            get(|| async { Json(json!([])) }),
        )
}

#[tokio::test]
async fn created_athlete_shows_up_in_the_list() {
    let store = Arc::new(Mutex::new(Vec::new()));
    let base = common::spawn(athletes_app(store)).await;
    let athletes: RestGateway<Athlete> = RestGateway::new(&base);
    let packages: RestGateway<SessionPackage> = RestGateway::new(&base);
    let mut navigator = RecordingNavigator::default();

    let mut screen = AthleteUpdateScreen::new();
    screen.mount(None, &packages).await.unwrap();
    screen.form.name = Some("alert huzzah toward".into());

    let outcome = screen.save(&athletes, &mut navigator).await.unwrap();
    assert!(outcome.is_saved());
    assert!(!screen.is_saving);
    assert_eq!(navigator.back_navigations, 1);

    let mut list: ListScreen<Athlete> = ListScreen::new();
    list.load(&athletes).await.unwrap();
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.total_count, Some(1));
    assert_eq!(list.items[0].id(), &100);
    assert_eq!(
        list.items[0].fields.name.as_deref(),
        Some("alert huzzah toward")
    );
}

#[tokio::test]
async fn failed_save_clears_the_flag_and_keeps_the_screen() {
    let app = Router::new()
        .route(
            "/api/athletes",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/api/session-packages", get(|| async { Json(json!([])) }));
    let base = common::spawn(app).await;
    let athletes: RestGateway<Athlete> = RestGateway::new(&base);
    let packages: RestGateway<SessionPackage> = RestGateway::new(&base);
    let mut navigator = RecordingNavigator::default();

    let mut screen = AthleteUpdateScreen::new();
    screen.mount(None, &packages).await.unwrap();
    screen.form.name = Some("thin".into());

    let outcome = screen.save(&athletes, &mut navigator).await.unwrap();
    assert!(!outcome.is_saved());
    assert!(!screen.is_saving);
    assert_eq!(navigator.back_navigations, 0);
    assert_eq!(screen.form.name.as_deref(), Some("thin"));
}

#[tokio::test]
async fn pick_list_offers_unattached_packages_plus_the_current_one() {
    let current = Uuid::new_v4();
    let free = Uuid::new_v4();
    let app = Router::new().route(
        "/api/session-packages",
        get(move |axum::extract::RawQuery(query): axum::extract::RawQuery| async move {
            assert_eq!(query.as_deref(), Some("filter=athlete-is-null"));
            Json(json!([{ "id": free, "name": "after downforce exotic" }]))
        }),
    );
    let base = common::spawn(app).await;
    let packages: RestGateway<SessionPackage> = RestGateway::new(&base);

    let athlete = Persisted::new(
        24215,
        Athlete {
            name: Some("blah if".into()),
            session_package: Some(SessionPackageRef { id: current }),
            ..Athlete::default()
        },
    );

    let mut screen = AthleteUpdateScreen::new();
    screen.mount(Some(athlete), &packages).await.unwrap();

    let offered: Vec<Uuid> = screen.packages.iter().map(Keyed::key).collect();
    assert_eq!(offered, vec![current, free]);
    assert!(screen.is_selected(&screen.packages[0]));
    assert!(!screen.is_selected(&screen.packages[1]));
}

#[tokio::test]
async fn pick_list_does_not_duplicate_an_already_listed_package() {
    let current = Uuid::new_v4();
    let app = Router::new().route(
        "/api/session-packages",
        get(move || async move {
            Json(json!([{ "id": current, "name": "pish" }]))
        }),
    );
    let base = common::spawn(app).await;
    let packages: RestGateway<SessionPackage> = RestGateway::new(&base);

    let athlete = Persisted::new(
        5073,
        Athlete {
            session_package: Some(SessionPackageRef { id: current }),
            ..Athlete::default()
        },
    );

    let mut screen = AthleteUpdateScreen::new();
    screen.mount(Some(athlete), &packages).await.unwrap();

    assert_eq!(screen.packages.len(), 1);
    // the fetched entry wins over the bare reference, keeping its name
    assert_eq!(screen.packages[0].fields.name.as_deref(), Some("pish"));
}

#[tokio::test]
async fn delete_dialog_reports_the_deleted_id() {
    let store = Arc::new(Mutex::new(vec![json!({ "id": 100, "name": "ponce" })]));
    let base = common::spawn(athletes_app(store.clone())).await;
    let athletes: RestGateway<Athlete> = RestGateway::new(&base);

    let mut list: ListScreen<Athlete> = ListScreen::new();
    list.load(&athletes).await.unwrap();
    assert_eq!(list.items.len(), 1);

    let dialog = DeleteDialog::new(list.items[0].clone());
    let outcome = dialog.confirm(&athletes).await.unwrap();
    assert_eq!(outcome, DialogOutcome::Deleted(100));

    list.remove(&100);
    assert!(list.items.is_empty());
    assert!(store.lock().unwrap().is_empty());
}
