//! Quick single-train decision rule.
//!
//! A fallback for callers that only need one sentence about one train. Cause
//! matching here is exact (case-sensitive), unlike the recommendation engine.

use crate::models::{Decision, DecisionRequest};

pub const NO_ACTION: &str = "No action required.";

/// Suggest an action for the requested train, or `None` if it is not in the snapshot.
pub fn decide(request: &DecisionRequest) -> Option<Decision> {
    let train = request
        .trains
        .iter()
        .find(|t| t.train_number == request.train_number)?;

    let (name, number) = (&train.name, train.train_number);
    let suggestion = match request.cause.as_deref() {
        Some("Climate") => format!("Delay train {name} ({number}) by 15 minutes due to weather."),
        Some("Technical") => format!("Redirect {name} ({number}) to maintenance."),
        Some("Accident") => format!("Hold {name} ({number}) at next station."),
        _ => NO_ACTION.to_string(),
    };

    Some(Decision { suggestion })
}
