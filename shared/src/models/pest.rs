//! Pest identification models

use serde::{Deserialize, Serialize};

/// Structured report extracted from the AI reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PestReport {
    pub pest_name: String,
    pub threat_level: String,
    pub characteristics: String,
    pub behavior: String,
    pub life_cycle: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub affected_parts: String,
    pub spread_pattern: String,
    #[serde(default)]
    pub treatments: Vec<Treatment>,
    #[serde(default)]
    pub prevention_measures: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural_enemies: Option<Vec<String>>,
}

/// A recommended treatment for the identified pest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub name: String,
    pub description: String,
    pub dosage: String,
    pub frequency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precautions: Option<String>,
}

/// Progress checkpoints reported while an image is analyzed.
///
/// The percentages are cosmetic and do not measure real work.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    ImageEncoded,
    PromptPrepared,
    RequestSent,
    ResponseReceived,
    Complete,
}

impl AnalysisStage {
    pub const ALL: [AnalysisStage; 5] = [
        AnalysisStage::ImageEncoded,
        AnalysisStage::PromptPrepared,
        AnalysisStage::RequestSent,
        AnalysisStage::ResponseReceived,
        AnalysisStage::Complete,
    ];

    pub fn percent(&self) -> u8 {
        match self {
            AnalysisStage::ImageEncoded => 20,
            AnalysisStage::PromptPrepared => 40,
            AnalysisStage::RequestSent => 60,
            AnalysisStage::ResponseReceived => 80,
            AnalysisStage::Complete => 100,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AnalysisStage::ImageEncoded => "Processing image...",
            AnalysisStage::PromptPrepared => "Preparing analysis request...",
            AnalysisStage::RequestSent => "Analyzing pest characteristics...",
            AnalysisStage::ResponseReceived => "Generating analysis report...",
            AnalysisStage::Complete => "Analysis complete!",
        }
    }
}

/// Result returned to the client after a successful analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PestAnalysis {
    pub report: PestReport,
    pub progress: u8,
}
