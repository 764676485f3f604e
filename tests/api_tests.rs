use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

use playmatch_api::api::{create_router, AppState};

fn create_test_server() -> TestServer {
    let state = AppState::new();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn game(catalog_id: Option<i64>, name: &str, rating: Option<f64>, favorite: bool) -> Value {
    json!({
        "catalog_id": catalog_id,
        "name": name,
        "platform": "pc",
        "genres": ["Action"],
        "user_rating": rating,
        "is_favorite": favorite
    })
}

async fn store_library(server: &TestServer, user_id: Uuid, games: Value) {
    let response = server
        .put(&format!("/api/v1/users/{}/games", user_id))
        .json(&games)
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let id = Uuid::new_v4();

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_str(&id.to_string()).unwrap(),
        )
        .await;
    let echoed = response.headers().get("x-request-id").unwrap();
    assert_eq!(echoed.to_str().unwrap(), id.to_string());

    let response = server.get("/health").await;
    let generated = response.headers().get("x-request-id").unwrap();
    assert!(Uuid::parse_str(generated.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_store_and_list_library() {
    let server = create_test_server();
    let user = Uuid::new_v4();

    store_library(
        &server,
        user,
        json!([game(Some(1), "Hades", Some(9.0), true), game(None, "Celeste", None, false)]),
    )
    .await;

    let response = server.get(&format!("/api/v1/users/{}/games", user)).await;
    response.assert_status_ok();
    let games: Vec<Value> = response.json();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0]["name"], "Hades");
    assert_eq!(games[0]["owner_id"], user.to_string());
    assert_eq!(games[1]["catalog_id"], Value::Null);
}

#[tokio::test]
async fn test_library_stats() {
    let server = create_test_server();
    let user = Uuid::new_v4();

    store_library(
        &server,
        user,
        json!([game(None, "A", Some(6.0), true), game(None, "B", Some(8.0), false)]),
    )
    .await;

    let response = server
        .get(&format!("/api/v1/users/{}/games/stats", user))
        .await;
    response.assert_status_ok();
    let stats: Value = response.json();
    assert_eq!(stats["total_games"], 2);
    assert_eq!(stats["favorite_games"], 1);
    assert_eq!(stats["average_rating"], 7.0);
    assert_eq!(stats["platforms"][0]["platform"], "pc");
    assert_eq!(stats["top_genres"][0]["genre"], "Action");
    assert_eq!(stats["top_genres"][0]["count"], 2);
}

#[tokio::test]
async fn test_invalid_rating_is_rejected() {
    let server = create_test_server();
    let response = server
        .put(&format!("/api/v1/users/{}/games", Uuid::new_v4()))
        .json(&json!([game(None, "Broken", Some(11.0), false)]))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("outside 0-10"));
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let server = create_test_server();
    let response = server
        .get(&format!("/api/v1/users/{}/games", Uuid::new_v4()))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_compare_stored_libraries() {
    let server = create_test_server();
    let (me, friend) = (Uuid::new_v4(), Uuid::new_v4());

    store_library(
        &server,
        me,
        json!([
            game(Some(10), "Shared One", None, false),
            game(Some(20), "Shared Two", None, false),
            game(Some(31), "Mine A", None, false),
            game(Some(32), "Mine B", None, false)
        ]),
    )
    .await;
    store_library(
        &server,
        friend,
        json!([
            game(Some(10), "Shared One (GOTY)", None, false),
            game(Some(20), "Shared Two", None, false),
            game(Some(41), "Theirs A", Some(9.5), true),
            game(Some(42), "Theirs B", Some(5.0), false)
        ]),
    )
    .await;

    let response = server
        .get(&format!("/api/v1/users/{}/compatibility/{}", me, friend))
        .await;
    response.assert_status_ok();

    let result: Value = response.json();
    assert_eq!(result["total_shared_games"], 2);
    assert_eq!(result["total_user1_games"], 4);
    assert_eq!(result["total_user2_games"], 4);
    assert!(result["compatibility_score"].as_u64().unwrap() >= 50);
    assert_eq!(result["compatibility_rating"], "Good Match");
    assert_eq!(result["shared_games"].as_array().unwrap().len(), 2);
    assert_eq!(result["platform_compatibility"][0]["shared"], true);
    assert_eq!(result["genre_compatibility"][0]["genre"], "Action");

    let recommendations = result["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0]["name"], "Theirs A");
}

#[tokio::test]
async fn test_self_comparison_is_rejected() {
    let server = create_test_server();
    let me = Uuid::new_v4();
    store_library(&server, me, json!([game(None, "Solo", None, false)])).await;

    let response = server
        .get(&format!("/api/v1/users/{}/compatibility/{}", me, me))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_compare_inline_empty_libraries() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/compare")
        .json(&json!({
            "user1": { "user_id": Uuid::new_v4(), "games": [] },
            "user2": { "user_id": Uuid::new_v4(), "games": null }
        }))
        .await;
    response.assert_status_ok();

    let result: Value = response.json();
    assert_eq!(result["compatibility_score"], 0);
    assert_eq!(result["compatibility_rating"], "No Data");
    assert_eq!(result["shared_games"], json!([]));
}

#[tokio::test]
async fn test_compare_inline_matches_by_name_strictly() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/compare")
        .json(&json!({
            "user1": {
                "user_id": Uuid::new_v4(),
                "games": [game(None, "Stardew Valley", None, false)]
            },
            "user2": {
                "user_id": Uuid::new_v4(),
                "games": [game(None, "stardew valley", None, false)]
            }
        }))
        .await;
    response.assert_status_ok();

    let result: Value = response.json();
    assert_eq!(result["total_shared_games"], 0);
    assert_eq!(result["user1_only_games"].as_array().unwrap().len(), 1);
    assert_eq!(result["user2_only_games"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_compare_inline_rejects_same_user() {
    let server = create_test_server();
    let me = Uuid::new_v4();
    let response = server
        .post("/api/v1/compare")
        .json(&json!({
            "user1": { "user_id": me, "games": [] },
            "user2": { "user_id": me, "games": [] }
        }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_user_id_is_json_bad_request() {
    let server = create_test_server();
    let response = server.get("/api/v1/users/not-a-uuid/games").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("UUID"));
}

#[tokio::test]
async fn test_game_without_platform_is_json_bad_request() {
    let server = create_test_server();
    let response = server
        .put(&format!("/api/v1/users/{}/games", Uuid::new_v4()))
        .json(&json!([{ "name": "x" }]))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("platform"));
}

#[tokio::test]
async fn test_compare_body_without_user_is_json_bad_request() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/compare")
        .json(&json!({ "user1": { "user_id": Uuid::new_v4(), "games": [] } }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("user2"));
}

#[tokio::test]
async fn test_blank_genre_is_rejected() {
    let server = create_test_server();
    let response = server
        .put(&format!("/api/v1/users/{}/games", Uuid::new_v4()))
        .json(&json!([{ "name": "Tagged", "platform": "pc", "genres": ["RPG", "  "] }]))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
