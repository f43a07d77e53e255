//! Service layer: the decision logic behind each endpoint.
//!
//! Services are synchronous pure functions over the request models; the HTTP
//! layer only deserializes, calls them and serializes the result.

pub mod decision;
pub mod recommendation;


pub use decision::decide;
pub use recommendation::{rank_neighbors, recommend};
