//! Community forum service
//!
//! Threads live in memory for the lifetime of the process, in submission
//! order. Nothing is ever removed.

use chrono::Utc;
use shared::{
    initial_likes, respond_to_question, validate_forum_query, ForumMessage, ForumThread,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::simulate_latency;

/// Author shown on questions posted through the API
pub const QUESTION_AUTHOR: &str = "You";

/// Ordered in-memory thread list shared by all requests
pub type ForumBoard = Arc<RwLock<Vec<ForumThread>>>;

/// Forum service for posting questions and reading threads
#[derive(Clone)]
pub struct ForumService {
    board: ForumBoard,
    latency: Duration,
}

impl ForumService {
    pub fn new(board: ForumBoard, latency: Duration) -> Self {
        Self { board, latency }
    }

    /// Post a question and append it with two simulated responses.
    /// The question is stored as typed; trimming only decides emptiness.
    pub async fn ask(&self, query: &str) -> AppResult<ForumThread> {
        validate_forum_query(query).map_err(|msg| AppError::validation("query", msg))?;

        simulate_latency(self.latency).await;

        let thread = {
            let mut rng = rand::thread_rng();
            let (topic, responses) = respond_to_question(query, &mut rng);
            ForumThread {
                id: Uuid::new_v4(),
                topic,
                question: ForumMessage {
                    author: QUESTION_AUTHOR.to_string(),
                    content: query.to_string(),
                },
                responses,
                likes: initial_likes(&mut rng),
                created_at: Utc::now(),
            }
        };

        self.board.write().await.push(thread.clone());
        tracing::info!(thread_id = %thread.id, topic = %thread.topic, "Forum question posted");

        Ok(thread)
    }

    /// All threads in submission order
    pub async fn list(&self) -> Vec<ForumThread> {
        self.board.read().await.clone()
    }

    /// Like or unlike a thread. Unliking never drops below zero.
    pub async fn toggle_like(&self, thread_id: Uuid, liked: bool) -> AppResult<ForumThread> {
        let mut board = self.board.write().await;
        let thread = board
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or_else(|| AppError::NotFound("Thread".to_string()))?;

        thread.likes = if liked {
            thread.likes.saturating_add(1)
        } else {
            thread.likes.saturating_sub(1)
        };
        tracing::debug!(thread_id = %thread_id, likes = thread.likes, "Thread like toggled");

        Ok(thread.clone())
    }
}
