//! Parsing of free-text AI replies into pest reports

use thiserror::Error;

use crate::models::PestReport;

/// Failures of a pest analysis submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PestAnalysisError {
    #[error("Failed to read the image file")]
    ReadImage,

    #[error("Failed to analyze image")]
    Analyze,

    #[error("Failed to parse analysis results")]
    Parse,
}

/// Slice the JSON object embedded in a reply: from the first `{` to the last `}`
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse the report embedded in an AI reply
pub fn parse_pest_report(text: &str) -> Result<PestReport, PestAnalysisError> {
    let json = extract_json_object(text).ok_or(PestAnalysisError::Parse)?;
    serde_json::from_str(json).map_err(|_| PestAnalysisError::Parse)
}
