use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use tournament_leaderboard::api::handlers::AppState;
use tournament_leaderboard::api::routes::create_router;
use tournament_leaderboard::config::AppConfig;
use tournament_leaderboard::database::models::NewTournament;
use tournament_leaderboard::database::{get_connection, open_database, results, tournaments, DbPool};
use tournament_leaderboard::scoring::TournamentResult;

struct TestApp {
    _dir: TempDir,
    pool: DbPool,
    router: Router,
}

fn test_app(provider_url: Option<String>) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("api.db");

    let mut config = AppConfig::from_json(r#"{"weights": {"1": 100, "2": 50, "99": 10}}"#).unwrap();
    config.storage.database_path = path.to_str().unwrap().to_string();
    config.provider.rate_limit_ms = 0;
    if let Some(url) = provider_url {
        config.provider.base_url = url;
    }

    let pool = open_database(&config.storage.database_path).unwrap();
    let state = Arc::new(AppState {
        pool: pool.clone(),
        config,
    });

    TestApp {
        _dir: dir,
        pool,
        router: create_router(state),
    }
}

fn seed(pool: &DbPool, id: i64, url: &str, entries: &[(&str, i32)]) {
    let conn = get_connection(pool).unwrap();
    tournaments::insert_tournament(
        &conn,
        &NewTournament {
            id,
            url,
            name: &format!("Weekly {}", id),
            started_at: None,
            full_url: None,
        },
    )
    .unwrap();
    for (username, rank) in entries {
        let result = TournamentResult::new(id, username, *rank).with_display_name(&username.to_uppercase());
        results::insert_result(&conn, &result).unwrap();
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn scoreboard_ranks_players_across_tournaments() {
    let app = test_app(None);
    seed(&app.pool, 1, "weekly1", &[("alice", 1), ("bob", 2), ("", 3)]);
    seed(&app.pool, 2, "weekly2", &[("alice", 2), ("carol", 7)]);

    let (status, body) = send(&app.router, get_request("/api/scoreboard")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items[0]["username"], "alice");
    assert_eq!(items[0]["score"], 56);
    assert_eq!(items[0]["gamesPlayed"], 2);
    assert_eq!(items[0]["name"], "ALICE");
    assert_eq!(items[1]["username"], "bob");
    assert_eq!(items[1]["score"], 30);
    assert_eq!(items[2]["username"], "carol");
    assert_eq!(items[2]["score"], 5);
    assert_eq!(items[2]["rank"], 3);
}

#[tokio::test]
async fn scoreboard_is_empty_without_results() {
    let app = test_app(None);

    let (status, body) = send(&app.router, get_request("/api/scoreboard")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn scoreboard_pages() {
    let app = test_app(None);
    seed(&app.pool, 1, "weekly1", &[("alice", 1), ("bob", 2), ("carol", 3)]);

    let (_, body) = send(&app.router, get_request("/api/scoreboard?page=2&pageSize=2")).await;

    assert_eq!(body["total"], 3);
    assert_eq!(body["page"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["username"], "carol");
}

#[tokio::test]
async fn scoreboard_page_far_past_the_end_is_empty() {
    let app = test_app(None);
    seed(&app.pool, 1, "weekly1", &[("alice", 1), ("bob", 2)]);

    let (status, body) = send(
        &app.router,
        get_request("/api/scoreboard?page=18446744073709551615&pageSize=2"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn participant_detail_and_profile() {
    let app = test_app(None);
    seed(&app.pool, 1, "weekly1", &[("alice", 1), ("bob", 2)]);

    let (status, profile) = send(
        &app.router,
        json_request("PUT", "/api/participants/bob", json!({"name": "Bob B.", "country": "PL"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["country"], "PL");

    let (status, detail) = send(&app.router, get_request("/api/participants/bob")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["rank"], 2);
    assert_eq!(detail["name"], "Bob B.");
    assert_eq!(detail["country"], "PL");
    assert_eq!(detail["results"][0]["tournamentUrl"], "weekly1");
    assert_eq!(detail["results"][0]["finalRank"], 2);

    let (status, _) = send(&app.router, get_request("/api/participants/nobody")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn tournament_detail_and_delete() {
    let app = test_app(None);
    seed(&app.pool, 1, "weekly1", &[("bob", 2), ("alice", 1)]);

    let (status, detail) = send(&app.router, get_request("/api/tournaments/weekly1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["name"], "Weekly 1");
    assert_eq!(detail["results"][0]["username"], "alice");

    let delete = Request::builder()
        .method("DELETE")
        .uri("/api/tournaments/weekly1")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app.router, delete).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app.router, get_request("/api/tournaments/weekly1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, board) = send(&app.router, get_request("/api/scoreboard")).await;
    assert_eq!(board["total"], 0);
}

async fn spawn_fake_challonge() -> String {
    let app = Router::new()
        .route(
            "/v1/tournaments/:id",
            get(|| async {
                Json(json!({"tournament": {
                    "id": 42,
                    "name": "Spring Open",
                    "started_at": "2024-04-06T10:00:00.000+02:00",
                    "full_challonge_url": "https://challonge.com/spring"
                }}))
            }),
        )
        .route(
            "/v1/tournaments/:id/participants.json",
            get(|| async {
                Json(json!([
                    {"participant": {"id": 1, "name": "Dana", "username": "dana", "final_rank": 1}},
                    {"participant": {"id": 2, "name": "Guest", "username": null, "final_rank": 2}}
                ]))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/v1/", addr)
}

#[tokio::test]
async fn adding_tournament_records_standings() {
    let provider_url = spawn_fake_challonge().await;
    let app = test_app(Some(provider_url));

    let (status, summary) = send(
        &app.router,
        json_request("POST", "/api/tournaments", json!({"url": "spring"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(summary["tournamentId"], 42);
    assert_eq!(summary["resultsStored"], 2);

    let (status, _) = send(
        &app.router,
        json_request("POST", "/api/tournaments", json!({"url": "spring"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, board) = send(&app.router, get_request("/api/scoreboard")).await;
    assert_eq!(board["total"], 1);
    assert_eq!(board["items"][0]["username"], "dana");
    assert_eq!(board["items"][0]["score"], 55);

    let (_, listed) = send(&app.router, get_request("/api/tournaments")).await;
    assert_eq!(listed[0]["url"], "spring");
}

#[tokio::test]
async fn adding_tournament_requires_url() {
    let app = test_app(None);

    let (status, _) = send(
        &app.router,
        json_request("POST", "/api/tournaments", json!({"url": "  "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
