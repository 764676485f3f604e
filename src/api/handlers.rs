use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{ComparisonResult, GameInput, GameRecord, LibraryStats},
    services::{compare, library},
};

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct LibraryPayload {
    pub user_id: Uuid,
    /// Missing or null means an empty library
    #[serde(default)]
    pub games: Option<Vec<GameInput>>,
}

impl LibraryPayload {
    fn into_records(self) -> Vec<GameRecord> {
        let owner = self.user_id;
        self.games
            .unwrap_or_default()
            .into_iter()
            .map(|input| GameRecord::from_input(owner, input))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub user1: LibraryPayload,
    pub user2: LibraryPayload,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Replaces a user's whole library
pub async fn put_library(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<Vec<GameInput>>, JsonRejection>,
) -> AppResult<Json<Vec<GameRecord>>> {
    let Path(user_id) = path?;
    let Json(games) = body?;
    let records: Vec<GameRecord> = games
        .into_iter()
        .map(|input| GameRecord::from_input(user_id, input))
        .collect();
    library::validate_library(&records)?;

    state.store.replace_library(user_id, records.clone()).await?;

    tracing::info!(user_id = %user_id, games = records.len(), "Library stored");

    Ok(Json(records))
}

/// Lists a user's games
pub async fn get_library(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<Vec<GameRecord>>> {
    let Path(user_id) = path?;
    Ok(Json(load_library(&state, user_id).await?))
}

/// Summary counts for a user's library
pub async fn get_library_stats(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<LibraryStats>> {
    let Path(user_id) = path?;
    let games = load_library(&state, user_id).await?;
    Ok(Json(library::library_stats(&games)))
}

/// Compares the requesting user's stored library with another user's
pub async fn compare_users(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    path: Result<Path<(Uuid, Uuid)>, PathRejection>,
) -> AppResult<Json<ComparisonResult>> {
    let Path((user_id, other_id)) = path?;
    if user_id == other_id {
        return Err(AppError::SelfComparison);
    }

    let user1 = load_library(&state, user_id).await?;
    let user2 = load_library(&state, other_id).await?;

    Ok(Json(run_comparison(&state, request_id, &user1, &user2)))
}

/// Compares two libraries supplied in the request body
pub async fn compare_libraries(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<CompareRequest>, JsonRejection>,
) -> AppResult<Json<ComparisonResult>> {
    let Json(request) = body?;
    if request.user1.user_id == request.user2.user_id {
        return Err(AppError::SelfComparison);
    }

    let user1 = request.user1.into_records();
    let user2 = request.user2.into_records();
    library::validate_library(&user1)?;
    library::validate_library(&user2)?;

    Ok(Json(run_comparison(&state, request_id, &user1, &user2)))
}

async fn load_library(state: &AppState, user_id: Uuid) -> AppResult<Vec<GameRecord>> {
    state
        .store
        .library(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No library for user {}", user_id)))
}

fn run_comparison(
    state: &AppState,
    request_id: RequestId,
    user1: &[GameRecord],
    user2: &[GameRecord],
) -> ComparisonResult {
    let result = compare(user1, user2, &state.policy);

    tracing::info!(
        request_id = %request_id,
        user1_games = result.total_user1_games,
        user2_games = result.total_user2_games,
        shared_games = result.total_shared_games,
        score = result.compatibility_score,
        rating = %result.compatibility_rating,
        "Comparison completed"
    );

    result
}
