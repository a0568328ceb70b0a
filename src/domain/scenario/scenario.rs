//! Scenario - a named, frozen snapshot of one calculation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Cost, ScenarioId, Timestamp};
use crate::domain::pricing::{BudgetBreakdown, EventParameters};

/// Parameters and the breakdown they produced, kept for comparison.
///
/// Scenarios are never edited; a changed plan is saved as a new scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    id: ScenarioId,
    name: String,
    #[serde(rename = "formData")]
    parameters: EventParameters,
    #[serde(rename = "budgetData")]
    breakdown: BudgetBreakdown,
    created_at: Timestamp,
}

impl Scenario {
    pub(crate) fn new(
        name: String,
        parameters: EventParameters,
        breakdown: BudgetBreakdown,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: ScenarioId::new(),
            name,
            parameters,
            breakdown,
            created_at,
        }
    }

    pub fn id(&self) -> ScenarioId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &EventParameters {
        &self.parameters
    }

    pub fn breakdown(&self) -> &BudgetBreakdown {
        &self.breakdown
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Shorthand for the breakdown's grand total.
    pub fn grand_total(&self) -> Cost {
        self.breakdown.grand_total()
    }
}
