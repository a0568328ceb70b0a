//! Export documents - portable summaries of a budget or a comparison.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Cost, Timestamp};
use crate::domain::pricing::{BudgetBreakdown, EventParameters};
use crate::domain::scenario::{ComparisonInsights, Scenario};

/// Headline figures for one budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_cost: Cost,
    /// Grand total per attendee; 0 when the audience is empty.
    pub per_guest: f64,
    /// Grand total per event hour; 0 when the duration is not positive.
    pub per_hour: f64,
}

/// A single budget ready to hand to a download or email collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleExportDocument {
    pub form_data: EventParameters,
    pub budget_data: BudgetBreakdown,
    pub exported_at: Timestamp,
    pub summary: BudgetSummary,
}

/// Headline figures across a scenario set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub total_scenarios: usize,
    pub lowest_cost: Cost,
    pub highest_cost: Cost,
    pub average_cost: f64,
    pub potential_savings: Cost,
}

/// A scenario comparison ready for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonExportDocument {
    pub scenarios: Vec<Scenario>,
    pub insights: Option<ComparisonInsights>,
    pub exported_at: Timestamp,
    pub summary: ComparisonSummary,
}

/// Either kind of export document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportDocument {
    Single(SingleExportDocument),
    Comparison(ComparisonExportDocument),
}

impl ExportDocument {
    /// Filename stem used when the document is written out.
    pub fn file_stem(&self) -> &'static str {
        match self {
            ExportDocument::Single(_) => "event-budget",
            ExportDocument::Comparison(_) => "scenario-comparison",
        }
    }

    pub fn exported_at(&self) -> Timestamp {
        match self {
            ExportDocument::Single(doc) => doc.exported_at,
            ExportDocument::Comparison(doc) => doc.exported_at,
        }
    }
}

impl From<SingleExportDocument> for ExportDocument {
    fn from(doc: SingleExportDocument) -> Self {
        ExportDocument::Single(doc)
    }
}

impl From<ComparisonExportDocument> for ExportDocument {
    fn from(doc: ComparisonExportDocument) -> Self {
        ExportDocument::Comparison(doc)
    }
}
