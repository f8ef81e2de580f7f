use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::StudentProfile;

/// Request to rank listings for an inline profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(nested)]
    pub profile: StudentProfile,
    #[serde(alias = "top_k", rename = "topK", default)]
    pub top_k: Option<usize>,
}

/// Query string for listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomInternshipsQuery {
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    5
}

/// Query string for stored-profile recommendations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopKQuery {
    #[serde(alias = "top_k", rename = "topK", default)]
    pub top_k: Option<usize>,
}
