//! Data Transfer Objects for the HTTP API.
//!
//! Request and recommendation bodies are the domain models themselves; only
//! the envelopes that exist purely for the transport live here.

use serde::{Deserialize, Serialize};

pub use crate::models::{
    Action, Decision, DecisionRequest, DisruptionRequest, Kpis, Recommendation, TrainSnapshot,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Wrapped recommendation list returned by the versioned endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationEnvelope {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
}
