use serde::{Deserialize, Serialize};

use super::train::TrainSnapshot;

/// Request for a quick single-train decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    #[serde(rename = "trainNo")]
    pub train_number: i64,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub trains: Vec<TrainSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub suggestion: String,
}
