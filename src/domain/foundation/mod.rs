//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the event budget domain.

mod errors;
mod ids;
mod money;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{PlanningSessionId, ScenarioId};
pub use money::{round_half_up, sum_costs, Cost};
pub use timestamp::Timestamp;
