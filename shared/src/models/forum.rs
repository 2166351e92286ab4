//! Community forum models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Topic bucket a forum question is classified into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Irrigation,
    Pests,
    Soil,
    Crops,
    Weather,
    Market,
    Equipment,
    General,
}

impl Topic {
    pub const ALL: [Topic; 8] = [
        Topic::Irrigation,
        Topic::Pests,
        Topic::Soil,
        Topic::Crops,
        Topic::Weather,
        Topic::Market,
        Topic::Equipment,
        Topic::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Topic::Irrigation => "irrigation",
            Topic::Pests => "pests",
            Topic::Soil => "soil",
            Topic::Crops => "crops",
            Topic::Weather => "weather",
            Topic::Market => "market",
            Topic::Equipment => "equipment",
            Topic::General => "general",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A procedurally generated farmer who answers forum questions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FarmerIdentity {
    pub name: String,
    pub village: String,
    pub experience_years: u32,
}

/// The question posted by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForumMessage {
    pub author: String,
    pub content: String,
}

/// A peer response attributed to a generated farmer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForumResponse {
    pub author: String,
    pub village: String,
    pub experience_years: u32,
    pub content: String,
}

impl ForumResponse {
    pub fn from_farmer(farmer: FarmerIdentity, content: impl Into<String>) -> Self {
        Self {
            author: farmer.name,
            village: farmer.village,
            experience_years: farmer.experience_years,
            content: content.into(),
        }
    }
}

/// A question together with its simulated responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumThread {
    pub id: Uuid,
    pub topic: Topic,
    pub question: ForumMessage,
    pub responses: Vec<ForumResponse>,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
}

/// Request body for posting a question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskQuestionInput {
    pub query: String,
}

/// Request body for liking or unliking a thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeInput {
    pub liked: bool,
}
