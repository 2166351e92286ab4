//! Error handling for the Farm Advisory Platform
//!
//! Provides consistent JSON error responses with the user-facing message

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::PestAnalysisError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Pest analysis errors
    #[error("Image read error: {0}")]
    ImageRead(String),

    #[error("AI analysis error: {0}")]
    AiAnalysis(String),

    #[error("AI response parse error: {0}")]
    AiParse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    pub fn validation(field: &str, message: &str) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<PestAnalysisError> for AppError {
    fn from(err: PestAnalysisError) -> Self {
        match err {
            PestAnalysisError::ReadImage => AppError::ImageRead(err.to_string()),
            PestAnalysisError::Analyze => AppError::AiAnalysis(err.to_string()),
            PestAnalysisError::Parse => AppError::AiParse(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::ImageRead(_) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "IMAGE_READ_ERROR".to_string(),
                    message: PestAnalysisError::ReadImage.to_string(),
                    field: Some("image".to_string()),
                },
            ),
            AppError::AiAnalysis(_) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "AI_ANALYSIS_ERROR".to_string(),
                    message: PestAnalysisError::Analyze.to_string(),
                    field: None,
                },
            ),
            AppError::AiParse(_) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "AI_PARSE_ERROR".to_string(),
                    message: PestAnalysisError::Parse.to_string(),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
