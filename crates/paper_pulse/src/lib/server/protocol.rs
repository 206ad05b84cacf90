use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct PodcastResponse {
    pub audio_url: String,
    pub conversation_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeckResponse {
    pub ppt_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub analysis_url: String,
    pub analysis_result: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
