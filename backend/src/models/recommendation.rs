use std::fmt;

use serde::{Deserialize, Serialize};

use super::train::TrainSnapshot;

/// Action recommended for a single train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    None,
    Hold,
    Rerouted,
    Delayed,
    Prioritize,
    Proceed,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::None => "None",
            Action::Hold => "Hold",
            Action::Rerouted => "Rerouted",
            Action::Delayed => "Delayed",
            Action::Prioritize => "Prioritize",
            Action::Proceed => "Proceed",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative impact estimates attached to a recommendation.
///
/// These are descriptive labels, not computed metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub punctuality_impact: String,
    pub throughput_impact: String,
    pub avg_delay: String,
}

impl Kpis {
    pub fn new(
        punctuality_impact: impl Into<String>,
        throughput_impact: impl Into<String>,
        avg_delay: impl Into<String>,
    ) -> Self {
        Self {
            punctuality_impact: punctuality_impact.into(),
            throughput_impact: throughput_impact.into(),
            avg_delay: avg_delay.into(),
        }
    }

    pub fn not_available() -> Self {
        Self::new("N/A", "N/A", "N/A")
    }

    pub fn prioritized() -> Self {
        Self::new("Improved", "Improved", "Reduced")
    }

    pub fn proceeding() -> Self {
        Self::new("Low", "Neutral", "0-5 min")
    }
}

pub const TRAIN_NOT_FOUND_TEXT: &str = "Disruption train not found in provided trains.";

/// One entry of the ranked recommendation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "trainNo")]
    pub train_number: i64,
    #[serde(rename = "trainName")]
    pub train_name: String,
    pub action: Action,
    pub text: String,
    pub kpis: Kpis,
}

impl Recommendation {
    /// Recommendation about `train` with the given action, text and KPIs.
    pub fn for_train(train: &TrainSnapshot, action: Action, text: String, kpis: Kpis) -> Self {
        Self {
            train_number: train.train_number,
            train_name: train.name.clone(),
            action,
            text,
            kpis,
        }
    }

    /// The single entry returned when the disrupted train is not in the snapshot.
    pub fn not_found(train_number: i64) -> Self {
        Self {
            train_number,
            train_name: train_number.to_string(),
            action: Action::None,
            text: TRAIN_NOT_FOUND_TEXT.to_string(),
            kpis: Kpis::not_available(),
        }
    }
}
