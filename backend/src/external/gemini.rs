//! Gemini generative language client
//!
//! Sends an uploaded image together with a structured prompt to the
//! `generateContent` endpoint and parses the JSON report out of the reply.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{parse_pest_report, AnalysisStage, ImageUpload, PestAnalysisError, PestReport};

use crate::config::AiConfig;
use crate::error::{AppError, AppResult};

/// Instruction sent with every image. The field names are the contract
/// `PestReport` deserializes.
pub const PEST_PROMPT: &str = r#"Analyze this image and provide detailed pest identification and treatment information in the following JSON format:
{
  "pestName": "Common and scientific name",
  "threatLevel": "Low/Medium/High",
  "characteristics": "Detailed physical description",
  "behavior": "Pest behavior patterns",
  "lifeCycle": "Life cycle information",
  "symptoms": ["List of damage symptoms"],
  "affectedParts": "Plant parts affected",
  "spreadPattern": "How the pest spreads",
  "treatments": [
    {
      "name": "Treatment name",
      "description": "Treatment description",
      "dosage": "Application dosage",
      "frequency": "Application frequency",
      "precautions": "Safety precautions"
    }
  ],
  "preventionMeasures": ["List of prevention measures"],
  "naturalEnemies": ["List of natural predators or enemies"]
}"#;

/// Something that can turn an image into a pest report
#[axum::async_trait]
pub trait PestIdentifier: Send + Sync {
    async fn identify(
        &self,
        image: &ImageUpload,
        on_progress: &(dyn Fn(AnalysisStage) + Send + Sync),
    ) -> AppResult<PestReport>;
}

/// Client for the Gemini `generateContent` API
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    http_client: Client,
}

/// Request body of `generateContent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            top_k: 32,
            top_p: 1.0,
            max_output_tokens: 2048,
        }
    }
}

/// Response body of `generateContent`
#[derive(Debug, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentRequest {
    /// Prompt plus the image as base64 inline data
    pub fn for_image(image: &ImageUpload, encoded: String) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part {
                        text: Some(PEST_PROMPT.to_string()),
                        inline_data: None,
                    },
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: image.mime_type.clone(),
                            data: encoded,
                        }),
                    },
                ],
            }],
            generation_config: GenerationConfig::default(),
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, empty when absent
    pub fn first_text(&self) -> &str {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .unwrap_or_default()
    }
}

impl GeminiClient {
    /// Create a new Gemini client from configuration
    pub fn new(config: &AiConfig) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.trim().to_string(),
            http_client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send a prepared request and return the reply text
    pub async fn generate_content(&self, request: &GenerateContentRequest) -> AppResult<String> {
        if self.api_key.is_empty() {
            return Err(AppError::Configuration("AI API key is not set".to_string()));
        }

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Gemini request failed: {}", e);
                AppError::AiAnalysis(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("Gemini returned {}: {}", status, body);
            return Err(AppError::AiAnalysis(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::AiAnalysis(format!("Failed to parse response: {}", e)))?;

        Ok(result.first_text().to_string())
    }
}

#[axum::async_trait]
impl PestIdentifier for GeminiClient {
    async fn identify(
        &self,
        image: &ImageUpload,
        on_progress: &(dyn Fn(AnalysisStage) + Send + Sync),
    ) -> AppResult<PestReport> {
        if image.is_empty() {
            return Err(PestAnalysisError::ReadImage.into());
        }
        let encoded = STANDARD.encode(&image.bytes);
        on_progress(AnalysisStage::ImageEncoded);

        let request = GenerateContentRequest::for_image(image, encoded);
        on_progress(AnalysisStage::PromptPrepared);

        on_progress(AnalysisStage::RequestSent);
        let text = self.generate_content(&request).await?;
        on_progress(AnalysisStage::ResponseReceived);

        let report = parse_pest_report(&text)?;
        on_progress(AnalysisStage::Complete);
        Ok(report)
    }
}
