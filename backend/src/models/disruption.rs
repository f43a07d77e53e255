use serde::{Deserialize, Serialize};

use super::recommendation::{Action, Kpis};
use super::train::TrainSnapshot;

/// Cause string substituted when a request carries none.
pub const UNKNOWN_CAUSE: &str = "Unknown";

/// Input to one recommendation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisruptionRequest {
    #[serde(rename = "disruptionTrainId")]
    pub disruption_train_id: i64,
    #[serde(default)]
    pub cause: Option<String>,
    /// Snapshot order decides ties when ranking neighbors.
    #[serde(default)]
    pub trains: Vec<TrainSnapshot>,
}

impl DisruptionRequest {
    pub fn new(
        disruption_train_id: i64,
        cause: impl Into<String>,
        trains: Vec<TrainSnapshot>,
    ) -> Self {
        Self {
            disruption_train_id,
            cause: Some(cause.into()),
            trains,
        }
    }

    /// The cause as reported, with absent or empty values resolved to [`UNKNOWN_CAUSE`].
    pub fn cause_text(&self) -> &str {
        match self.cause.as_deref() {
            Some(cause) if !cause.is_empty() => cause,
            _ => UNKNOWN_CAUSE,
        }
    }

    pub fn classified_cause(&self) -> DisruptionCause {
        DisruptionCause::classify(self.cause_text())
    }

    /// First train in the snapshot whose number is the disrupted id.
    pub fn disrupted_train(&self) -> Option<&TrainSnapshot> {
        self.trains
            .iter()
            .find(|t| t.train_number == self.disruption_train_id)
    }
}

/// Disruption cause after case-insensitive matching against the known vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisruptionCause {
    Traffic,
    Maintenance,
    Technical,
    /// Anything else, carrying the raw cause text.
    Other(String),
}

impl DisruptionCause {
    pub fn classify(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "traffic" => DisruptionCause::Traffic,
            "maintenance" => DisruptionCause::Maintenance,
            "technical" => DisruptionCause::Technical,
            _ => DisruptionCause::Other(raw.to_string()),
        }
    }

    /// Action for the disrupted train itself.
    pub fn action(&self) -> Action {
        match self {
            DisruptionCause::Traffic => Action::Hold,
            DisruptionCause::Maintenance => Action::Rerouted,
            DisruptionCause::Technical | DisruptionCause::Other(_) => Action::Delayed,
        }
    }

    pub fn kpis(&self) -> Kpis {
        match self {
            DisruptionCause::Traffic => Kpis::new("Medium", "Medium", "5-12 min"),
            DisruptionCause::Maintenance => Kpis::new("High", "Low", "10-25 min"),
            DisruptionCause::Technical => Kpis::new("High", "Medium", "8-20 min"),
            DisruptionCause::Other(_) => Kpis::new("High", "Medium", "5-15 min"),
        }
    }

    /// Explanation for the disrupted train's recommendation.
    pub fn explain(&self, train: &TrainSnapshot) -> String {
        let (name, number) = (&train.name, train.train_number);
        match self {
            DisruptionCause::Traffic => {
                format!("AI suggests holding {name} ({number}) due to traffic congestion.")
            }
            DisruptionCause::Maintenance => {
                format!("AI suggests rerouting {name} ({number}) to avoid maintenance block.")
            }
            DisruptionCause::Technical => {
                format!("AI suggests delaying {name} ({number}) due to technical issue.")
            }
            DisruptionCause::Other(cause) => {
                format!("AI suggests delaying {name} ({number}) due to {cause}.")
            }
        }
    }
}
