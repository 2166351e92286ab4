//! HTTP handlers for the community forum

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::{AskQuestionInput, ForumThread, LikeInput};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::ForumService;
use crate::AppState;

fn forum_service(state: &AppState) -> ForumService {
    ForumService::new(state.forum.clone(), state.config.simulation.latency())
}

/// List all threads in submission order
pub async fn list_threads(State(state): State<AppState>) -> Json<Vec<ForumThread>> {
    Json(forum_service(&state).list().await)
}

/// Post a question and receive the thread with its responses
pub async fn ask_question(
    State(state): State<AppState>,
    Json(input): Json<AskQuestionInput>,
) -> AppResult<(StatusCode, Json<ForumThread>)> {
    let thread = forum_service(&state).ask(&input.query).await?;
    Ok((StatusCode::CREATED, Json(thread)))
}

/// Like or unlike a thread
pub async fn like_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<Uuid>,
    Json(input): Json<LikeInput>,
) -> AppResult<Json<ForumThread>> {
    let thread = forum_service(&state)
        .toggle_like(thread_id, input.liked)
        .await?;
    Ok(Json(thread))
}
