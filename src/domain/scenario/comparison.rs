//! Comparison Analyzer - Insights across saved scenarios.
//!
//! Insights are derived from each scenario's grand total on demand and are
//! never stored, so they cannot drift from the scenarios they describe.

use serde::{Deserialize, Serialize};

use super::scenario::Scenario;
use crate::domain::foundation::{Cost, ScenarioId};

/// Fewest scenarios worth comparing.
pub const MIN_SCENARIOS_FOR_COMPARISON: usize = 2;

/// Cost extremes and spread across a scenario set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonInsights {
    pub min_cost: Cost,
    pub max_cost: Cost,
    pub avg_cost: f64,
    /// `max_cost - min_cost`.
    pub savings: Cost,
    /// Index of the first scenario with `min_cost`.
    pub cheapest_index: usize,
    /// Index of the first scenario with `max_cost`.
    pub expensive_index: usize,
}

/// How one scenario sits relative to the cheapest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioCostDelta {
    pub scenario_id: ScenarioId,
    pub name: String,
    pub grand_total: Cost,
    pub above_cheapest: Cost,
    pub is_cheapest: bool,
    pub is_most_expensive: bool,
}

/// Stateless comparison over scenario grand totals.
pub struct ComparisonAnalyzer;

impl ComparisonAnalyzer {
    /// Computes insights, or `None` when fewer than two scenarios exist.
    pub fn compare(scenarios: &[Scenario]) -> Option<ComparisonInsights> {
        let totals: Vec<Cost> = scenarios.iter().map(Scenario::grand_total).collect();
        Self::compare_totals(&totals)
    }

    /// Same as [`compare`](Self::compare) over raw grand totals.
    ///
    /// Ties resolve to the first occurrence.
    pub fn compare_totals(totals: &[Cost]) -> Option<ComparisonInsights> {
        if totals.len() < MIN_SCENARIOS_FOR_COMPARISON {
            return None;
        }

        let mut cheapest_index = 0;
        let mut expensive_index = 0;
        for (index, total) in totals.iter().enumerate().skip(1) {
            if *total < totals[cheapest_index] {
                cheapest_index = index;
            }
            if *total > totals[expensive_index] {
                expensive_index = index;
            }
        }

        let min_cost = totals[cheapest_index];
        let max_cost = totals[expensive_index];
        let sum: f64 = totals.iter().map(|total| *total as f64).sum();

        Some(ComparisonInsights {
            min_cost,
            max_cost,
            avg_cost: sum / totals.len() as f64,
            savings: max_cost - min_cost,
            cheapest_index,
            expensive_index,
        })
    }

    /// Per-scenario difference from the cheapest scenario, in store order.
    ///
    /// Empty when there is nothing to compare.
    pub fn cost_differences(scenarios: &[Scenario]) -> Vec<ScenarioCostDelta> {
        let Some(insights) = Self::compare(scenarios) else {
            return Vec::new();
        };

        scenarios
            .iter()
            .enumerate()
            .map(|(index, scenario)| ScenarioCostDelta {
                scenario_id: scenario.id(),
                name: scenario.name().to_string(),
                grand_total: scenario.grand_total(),
                above_cheapest: scenario.grand_total() - insights.min_cost,
                is_cheapest: index == insights.cheapest_index,
                is_most_expensive: index == insights.expensive_index,
            })
            .collect()
    }
}
