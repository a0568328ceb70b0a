//! CalculateBudgetHandler - Query handler pricing a set of event parameters.
//!
//! Rejects malformed hours, then delegates to the calculator. Incomplete
//! parameters are not an error and produce the empty breakdown.

use std::sync::Arc;

use crate::application::handlers::HandlerError;
use crate::domain::pricing::{BudgetBreakdown, BudgetCalculator, EventParameters};

/// Query to price one set of parameters.
#[derive(Debug, Clone)]
pub struct CalculateBudgetQuery {
    pub parameters: EventParameters,
}

/// Handler for budget calculation.
pub struct CalculateBudgetHandler {
    calculator: Arc<dyn BudgetCalculator>,
}

impl CalculateBudgetHandler {
    pub fn new(calculator: Arc<dyn BudgetCalculator>) -> Self {
        Self { calculator }
    }

    pub fn handle(&self, query: CalculateBudgetQuery) -> Result<BudgetBreakdown, HandlerError> {
        query.parameters.validate()?;
        Ok(self.calculator.calculate(&query.parameters))
    }
}
