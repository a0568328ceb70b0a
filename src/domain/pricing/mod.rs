//! Pricing Module - Rate sheet and cost calculation.
//!
//! # Components
//!
//! - `PricingRuleTable` - Versioned lookup tables (city multiplier, venue,
//!   catering and add-on service rates)
//! - `EventParameters` - Calculation input
//! - `CostCalculator` - Pure function from parameters to `BudgetBreakdown`
//!
//! Nothing here performs I/O except loading a custom rule table from disk.

mod breakdown;
mod calculator;
mod codes;
mod parameters;
mod rule_table;

pub use breakdown::{BudgetBreakdown, BudgetCategory, CategoryBreakdown, CostLineItem};
pub use calculator::{
    calculate, BudgetCalculator, CostCalculator, CLEANUP_RATE_PER_HOUR, CONTINGENCY_RATE,
    INSURANCE_BASE, PERMIT_BASE, PERMIT_EVENT_TYPE, SERVICE_FEE_RATE, SETUP_RATE_PER_HOUR,
    TAX_RATE, VENUE_RATE_HOURS,
};
pub use codes::{humanize_code, AddOnService, CateringType, City, VenueType};
pub use parameters::{
    EventParameters, DEFAULT_CLEANUP_HOURS, DEFAULT_DURATION_HOURS, DEFAULT_SETUP_HOURS,
    MAX_EVENT_HOURS,
};
pub use rule_table::{
    PricingRuleTable, RuleTableError, DEFAULT_CATERING_RATE, DEFAULT_CITY_MULTIPLIER,
    DEFAULT_SERVICE_RATE, DEFAULT_VENUE_RATE, STANDARD_RULES_VERSION,
};
