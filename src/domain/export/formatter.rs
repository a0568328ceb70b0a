//! Export Formatter - Builds export documents from engine output.
//!
//! Formatting is pure. Writing the document to a file, a response or an
//! email is left to a [`DocumentExporter`](crate::ports::DocumentExporter).

use super::document::{
    BudgetSummary, ComparisonExportDocument, ComparisonSummary, SingleExportDocument,
};
use crate::domain::foundation::{Cost, Timestamp};
use crate::domain::pricing::{BudgetBreakdown, EventParameters};
use crate::domain::scenario::{ComparisonInsights, Scenario};

/// Stateless builder for export documents.
pub struct ExportFormatter;

impl ExportFormatter {
    /// Document for one budget, stamped with the current time.
    pub fn format_single(
        params: &EventParameters,
        breakdown: &BudgetBreakdown,
    ) -> SingleExportDocument {
        Self::format_single_at(params, breakdown, Timestamp::now())
    }

    pub fn format_single_at(
        params: &EventParameters,
        breakdown: &BudgetBreakdown,
        exported_at: Timestamp,
    ) -> SingleExportDocument {
        let total_cost = breakdown.grand_total();
        SingleExportDocument {
            form_data: params.clone(),
            budget_data: breakdown.clone(),
            exported_at,
            summary: BudgetSummary {
                total_cost,
                per_guest: per_unit(total_cost, f64::from(params.audience_size)),
                per_hour: per_unit(total_cost, params.duration),
            },
        }
    }

    /// Document for a scenario set, stamped with the current time.
    pub fn format_comparison(
        scenarios: &[Scenario],
        insights: Option<&ComparisonInsights>,
    ) -> ComparisonExportDocument {
        Self::format_comparison_at(scenarios, insights, Timestamp::now())
    }

    /// Without insights the cost figures in the summary are zero.
    pub fn format_comparison_at(
        scenarios: &[Scenario],
        insights: Option<&ComparisonInsights>,
        exported_at: Timestamp,
    ) -> ComparisonExportDocument {
        let summary = match insights {
            Some(insights) => ComparisonSummary {
                total_scenarios: scenarios.len(),
                lowest_cost: insights.min_cost,
                highest_cost: insights.max_cost,
                average_cost: insights.avg_cost,
                potential_savings: insights.savings,
            },
            None => ComparisonSummary {
                total_scenarios: scenarios.len(),
                lowest_cost: 0,
                highest_cost: 0,
                average_cost: 0.0,
                potential_savings: 0,
            },
        };

        ComparisonExportDocument {
            scenarios: scenarios.to_vec(),
            insights: insights.cloned(),
            exported_at,
            summary,
        }
    }
}

fn per_unit(total: Cost, units: f64) -> f64 {
    if !units.is_finite() || units <= 0.0 {
        return 0.0;
    }
    total as f64 / units
}
