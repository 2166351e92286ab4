//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// An uploaded image awaiting pest analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    pub mime_type: String,
    pub file_name: Option<String>,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            file_name: None,
            bytes,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// Whether a MIME type names an image: a plain `image/` prefix check, so a
/// bare `image/` passes and the match is case-sensitive
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}
