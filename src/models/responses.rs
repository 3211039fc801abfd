use serde::{Deserialize, Serialize};
use crate::core::weights::ResolvedWeights;
use crate::models::domain::RankedCandidate;

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub request_id: String,
    /// False when ranking failed and `results` is the unranked input
    pub ranked: bool,
    pub results: Vec<RankedCandidate>,
    pub total_candidates: usize,
    pub weights: ResolvedWeights,
    pub warnings: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
