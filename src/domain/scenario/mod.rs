//! Scenario Module - Saved calculations and their comparison.
//!
//! - `ScenarioStore` - Bounded collection (at most five) with a selection
//! - `ComparisonAnalyzer` - Min/max/average/savings over grand totals

mod comparison;
mod errors;
mod scenario;
mod store;

pub use comparison::{
    ComparisonAnalyzer, ComparisonInsights, ScenarioCostDelta, MIN_SCENARIOS_FOR_COMPARISON,
};
pub use errors::ScenarioError;
pub use scenario::Scenario;
pub use store::{ScenarioStore, MAX_SCENARIOS};
