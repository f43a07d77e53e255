//! # Rail Advisor
//!
//! Stateless disruption advisor for rail traffic control.
//!
//! Given a disrupted train and a snapshot of nearby scheduled trains, the
//! advisor produces a short ranked list of recommended actions: hold,
//! reroute or delay the disrupted train, prioritise the two trains arriving
//! nearest in time, and let the next two proceed. Impact estimates are
//! qualitative labels, not computed metrics.
//!
//! ## Architecture
//!
//! - [`models`]: request/response types and `"HH:MM"` time handling
//! - [`services`]: the recommendation engine and the quick decision rule
//! - [`config`]: server configuration from TOML and environment
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ```
//! use rail_advisor::models::{Action, DisruptionRequest, TrainSnapshot};
//! use rail_advisor::services::recommend;
//!
//! let request = DisruptionRequest::new(
//!     10,
//!     "traffic",
//!     vec![
//!         TrainSnapshot::new(10, "Express", "10:00"),
//!         TrainSnapshot::new(11, "Local", "10:05"),
//!     ],
//! );
//! let recs = recommend(&request);
//! assert_eq!(recs[0].action, Action::Hold);
//! assert_eq!(recs[1].action, Action::Prioritize);
//! ```

pub mod config;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
