//! Shared CLI value types.

pub mod ids;

pub use ids::{PlayerId, TeamId};
