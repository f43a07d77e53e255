//! Domain types shared by the recommendation services and the HTTP layer.

pub mod decision;
pub mod disruption;
pub mod recommendation;
pub mod time;
pub mod train;

pub use decision::*;
pub use disruption::*;
pub use recommendation::*;
pub use time::*;
pub use train::*;
