use serde::{Deserialize, Serialize};

use super::time::ClockMinutes;

/// One scheduled train as seen at the moment of a request.
///
/// Only `trainNo` is mandatory on the wire; every descriptive field defaults
/// to an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainSnapshot {
    #[serde(rename = "trainNo")]
    pub train_number: i64,
    #[serde(default)]
    pub name: String,
    /// `"HH:MM"`
    #[serde(rename = "arrives", default)]
    pub arrival_time: String,
    /// `"HH:MM"`
    #[serde(rename = "departs", default)]
    pub departure_time: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub status: String,
}

impl TrainSnapshot {
    /// Minimal snapshot carrying a number, name and arrival time.
    pub fn new(
        train_number: i64,
        name: impl Into<String>,
        arrival_time: impl Into<String>,
    ) -> Self {
        Self {
            train_number,
            name: name.into(),
            arrival_time: arrival_time.into(),
            departure_time: String::new(),
            duration: String::new(),
            direction: String::new(),
            status: String::new(),
        }
    }

    pub fn with_departure(mut self, departure_time: impl Into<String>) -> Self {
        self.departure_time = departure_time.into();
        self
    }

    pub fn arrival_minutes(&self) -> ClockMinutes {
        ClockMinutes::parse_lenient(&self.arrival_time)
    }

    pub fn departure_minutes(&self) -> ClockMinutes {
        ClockMinutes::parse_lenient(&self.departure_time)
    }
}
