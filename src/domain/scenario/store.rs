//! Scenario Store - Bounded, ordered collection of saved scenarios.
//!
//! One store belongs to one planning session. It is plain in-memory state;
//! a persistence collaborator may serialize it, and deserialization re-checks
//! the capacity bound.

use serde::{Deserialize, Serialize};

use super::comparison::{ComparisonAnalyzer, ComparisonInsights};
use super::errors::ScenarioError;
use super::scenario::Scenario;
use crate::domain::foundation::{ScenarioId, Timestamp};
use crate::domain::pricing::{BudgetBreakdown, EventParameters};

/// Most scenarios a store can hold.
pub const MAX_SCENARIOS: usize = 5;

/// Ordered scenarios plus the one currently selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoreSnapshot")]
pub struct ScenarioStore {
    capacity: usize,
    scenarios: Vec<Scenario>,
    selected: Option<ScenarioId>,
}

impl ScenarioStore {
    /// An empty store holding up to [`MAX_SCENARIOS`].
    pub fn new() -> Self {
        Self::with_capacity(MAX_SCENARIOS)
    }

    /// An empty store with a lower limit. The limit is clamped to
    /// `1..=MAX_SCENARIOS`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.clamp(1, MAX_SCENARIOS),
            scenarios: Vec::new(),
            selected: None,
        }
    }

    /// Saves a snapshot of a calculation.
    ///
    /// A blank name becomes "Scenario N". When the store is full the request
    /// is rejected with [`ScenarioError::MaxCapacity`] and nothing changes.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        parameters: EventParameters,
        breakdown: BudgetBreakdown,
    ) -> Result<&Scenario, ScenarioError> {
        if self.is_full() {
            tracing::warn!(capacity = self.capacity, "Scenario rejected, store is full");
            return Err(ScenarioError::MaxCapacity {
                capacity: self.capacity,
            });
        }

        let name = name.into();
        let name = if name.trim().is_empty() {
            format!("Scenario {}", self.scenarios.len() + 1)
        } else {
            name.trim().to_string()
        };

        let scenario = Scenario::new(name, parameters, breakdown, Timestamp::now());
        tracing::info!(
            scenario_id = %scenario.id(),
            name = scenario.name(),
            grand_total = scenario.grand_total(),
            "Scenario saved"
        );
        self.scenarios.push(scenario);
        Ok(&self.scenarios[self.scenarios.len() - 1])
    }

    /// Deletes a scenario, returning it. Removing the selected scenario
    /// clears the selection.
    pub fn remove(&mut self, id: ScenarioId) -> Option<Scenario> {
        let position = self.scenarios.iter().position(|s| s.id() == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        let removed = self.scenarios.remove(position);
        tracing::info!(scenario_id = %id, "Scenario removed");
        Some(removed)
    }

    /// Marks a scenario as the current one.
    pub fn select(&mut self, id: ScenarioId) -> Result<&Scenario, ScenarioError> {
        let scenario = self
            .scenarios
            .iter()
            .find(|s| s.id() == id)
            .ok_or(ScenarioError::NotFound(id))?;
        self.selected = Some(id);
        Ok(scenario)
    }

    /// Clears the selection without removing anything.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Removes every scenario and the selection.
    pub fn clear(&mut self) {
        self.scenarios.clear();
        self.selected = None;
    }

    /// Scenarios in the order they were saved.
    pub fn list(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn get(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id() == id)
    }

    pub fn selected(&self) -> Option<&Scenario> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.scenarios.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.scenarios.len())
    }

    /// Insights over the current scenarios.
    pub fn compare(&self) -> Option<ComparisonInsights> {
        ComparisonAnalyzer::compare(&self.scenarios)
    }
}

impl Default for ScenarioStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of a store.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreSnapshot {
    #[serde(default = "default_capacity")]
    capacity: usize,
    #[serde(default)]
    scenarios: Vec<Scenario>,
    #[serde(default)]
    selected: Option<ScenarioId>,
}

fn default_capacity() -> usize {
    MAX_SCENARIOS
}

impl TryFrom<StoreSnapshot> for ScenarioStore {
    type Error = ScenarioError;

    fn try_from(snapshot: StoreSnapshot) -> Result<Self, Self::Error> {
        if snapshot.capacity == 0 || snapshot.capacity > MAX_SCENARIOS {
            return Err(ScenarioError::InvalidSnapshot(format!(
                "capacity must be between 1 and {}, got {}",
                MAX_SCENARIOS, snapshot.capacity
            )));
        }
        if snapshot.scenarios.len() > snapshot.capacity {
            return Err(ScenarioError::InvalidSnapshot(format!(
                "{} scenarios exceed capacity {}",
                snapshot.scenarios.len(),
                snapshot.capacity
            )));
        }

        let selected = snapshot
            .selected
            .filter(|id| snapshot.scenarios.iter().any(|s| s.id() == *id));

        Ok(Self {
            capacity: snapshot.capacity,
            scenarios: snapshot.scenarios,
            selected,
        })
    }
}
