//! Cost Calculator - Turns event parameters into a budget breakdown.
//!
//! The calculation is a pure function of the parameters and the rule table:
//! no I/O, no shared state, and identical input always yields an identical
//! breakdown. Callers drive it through the [`BudgetCalculator`] trait so any
//! front end can supply parameters.

use std::sync::Arc;

use super::breakdown::{BudgetBreakdown, CategoryBreakdown, CostLineItem};
use super::codes::{humanize_code, City, VenueType};
use super::parameters::EventParameters;
use super::rule_table::PricingRuleTable;
use crate::domain::foundation::{round_half_up, sum_costs, Cost};

/// Venue rental rates are quoted for a block of this many hours.
pub const VENUE_RATE_HOURS: f64 = 4.0;

/// Hourly setup labour before multiplier.
pub const SETUP_RATE_PER_HOUR: f64 = 100.0;

/// Hourly cleanup labour before multiplier.
pub const CLEANUP_RATE_PER_HOUR: f64 = 80.0;

/// Catering service charge.
pub const SERVICE_FEE_RATE: f64 = 0.18;

/// Tax on catering plus service charge.
pub const TAX_RATE: f64 = 0.08;

/// Contingency buffer over base costs.
pub const CONTINGENCY_RATE: f64 = 0.1;

/// Event insurance before multiplier.
pub const INSURANCE_BASE: f64 = 150.0;

/// Permit fee before multiplier.
pub const PERMIT_BASE: f64 = 200.0;

/// Event type that triggers the permit fee.
///
/// This is compared against the event type, not the venue type, even though
/// the value is a venue code. Kept as-is so budgets stay comparable with
/// previously quoted figures.
pub const PERMIT_EVENT_TYPE: &str = "outdoor-venue";

/// Anything that can price a set of event parameters.
pub trait BudgetCalculator: Send + Sync {
    /// Produces a fresh breakdown. Never fails; incomplete parameters give
    /// the empty breakdown.
    fn calculate(&self, params: &EventParameters) -> BudgetBreakdown;
}

/// Rule-table driven calculator.
#[derive(Debug, Clone)]
pub struct CostCalculator {
    rules: Arc<PricingRuleTable>,
}

impl CostCalculator {
    pub fn new(rules: Arc<PricingRuleTable>) -> Self {
        Self { rules }
    }

    /// Calculator backed by the built-in rate sheet.
    pub fn standard() -> Self {
        Self::new(PricingRuleTable::standard())
    }

    pub fn rules(&self) -> &PricingRuleTable {
        &self.rules
    }
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::standard()
    }
}

impl BudgetCalculator for CostCalculator {
    fn calculate(&self, params: &EventParameters) -> BudgetBreakdown {
        let (city, venue_type) = match (params.is_complete(), &params.city, &params.venue_type) {
            (true, Some(city), Some(venue_type)) => (city, venue_type),
            _ => return BudgetBreakdown::empty(),
        };

        let multiplier = self.rules.city_multiplier(city);

        let venue = self.venue_costs(params, city, venue_type, multiplier);
        let catering = self.catering_costs(params, multiplier);
        let services = self.service_costs(params, multiplier);

        let contingency_base = sum_costs([
            venue.rental,
            catering.food_and_beverage,
            catering.service_fee,
            catering.tax,
            services.total(),
        ]);
        let misc = miscellaneous_costs(params, contingency_base, multiplier);

        let breakdown =
            BudgetBreakdown::from_categories(venue.category, catering.category, services, misc);
        tracing::trace!(
            city = %city,
            venue_type = %venue_type,
            grand_total = breakdown.grand_total(),
            "Calculated budget"
        );
        breakdown
    }
}

/// Prices parameters with the built-in rate sheet.
pub fn calculate(params: &EventParameters) -> BudgetBreakdown {
    CostCalculator::standard().calculate(params)
}

struct VenueCosts {
    rental: Cost,
    category: CategoryBreakdown,
}

struct CateringCosts {
    food_and_beverage: Cost,
    service_fee: Cost,
    tax: Cost,
    category: CategoryBreakdown,
}

impl CostCalculator {
    fn venue_costs(
        &self,
        params: &EventParameters,
        city: &City,
        venue_type: &VenueType,
        multiplier: f64,
    ) -> VenueCosts {
        let rental = round_half_up(
            self.rules.venue_rate(venue_type) * multiplier * (params.duration / VENUE_RATE_HOURS),
        );
        let setup = round_half_up(params.setup_time * SETUP_RATE_PER_HOUR * multiplier);
        let cleanup = round_half_up(params.cleanup_time * CLEANUP_RATE_PER_HOUR * multiplier);

        let category = CategoryBreakdown::from_items(vec![
            CostLineItem::new(
                "Venue Rental",
                rental,
                format!(
                    "{} in {} for {} hours",
                    venue_type.label(),
                    city.label(),
                    params.duration
                ),
            ),
            CostLineItem::new(
                "Setup Time",
                setup,
                format!("{} hours of venue setup", params.setup_time),
            ),
            CostLineItem::new(
                "Cleanup Time",
                cleanup,
                format!("{} hours of post-event cleanup", params.cleanup_time),
            ),
        ]);

        VenueCosts { rental, category }
    }

    fn catering_costs(&self, params: &EventParameters, multiplier: f64) -> CateringCosts {
        let rate = params
            .catering_type
            .as_ref()
            .map(|catering| self.rules.catering_rate(catering))
            .unwrap_or(0.0);
        let food_and_beverage =
            round_half_up(rate * f64::from(params.audience_size) * multiplier);

        if food_and_beverage == 0 {
            return CateringCosts {
                food_and_beverage: 0,
                service_fee: 0,
                tax: 0,
                category: CategoryBreakdown::from_items(vec![CostLineItem::new(
                    "No Catering Selected",
                    0,
                    "Guests arrange their own food and beverage",
                )]),
            };
        }

        let service_fee = round_half_up(food_and_beverage as f64 * SERVICE_FEE_RATE);
        let tax = round_half_up(food_and_beverage.saturating_add(service_fee) as f64 * TAX_RATE);
        let style = params
            .catering_type
            .as_ref()
            .map(|catering| catering.label())
            .unwrap_or_default();

        let category = CategoryBreakdown::from_items(vec![
            CostLineItem::new(
                "Food & Beverage",
                food_and_beverage,
                format!("{} for {} guests", style, params.audience_size),
            ),
            CostLineItem::new(
                "Service Fee (18%)",
                service_fee,
                "Catering staff and service charge",
            ),
            CostLineItem::new("Tax (8%)", tax, "Sales tax on catering and service"),
        ]);

        CateringCosts {
            food_and_beverage,
            service_fee,
            tax,
            category,
        }
    }

    fn service_costs(&self, params: &EventParameters, multiplier: f64) -> CategoryBreakdown {
        let items = params
            .unique_services()
            .into_iter()
            .map(|service| {
                let cost = round_half_up(self.rules.service_rate(service) * multiplier);
                CostLineItem::new(
                    humanize_code(service.as_str()),
                    cost,
                    format!("{} add-on", service.label()),
                )
            })
            .collect();
        CategoryBreakdown::from_items(items)
    }
}

fn miscellaneous_costs(
    params: &EventParameters,
    contingency_base: Cost,
    multiplier: f64,
) -> CategoryBreakdown {
    let contingency = round_half_up(contingency_base as f64 * CONTINGENCY_RATE);
    let insurance = round_half_up(INSURANCE_BASE * multiplier);

    let mut items = vec![
        CostLineItem::new(
            "Contingency (10%)",
            contingency,
            "Buffer for unplanned expenses",
        ),
        CostLineItem::new("Event Insurance", insurance, "General liability coverage"),
    ];

    if params.event_type.as_deref() == Some(PERMIT_EVENT_TYPE) {
        let permits = round_half_up(PERMIT_BASE * multiplier);
        items.push(CostLineItem::new(
            "Permits & Licenses",
            permits,
            "Outdoor event permits",
        ));
    }

    CategoryBreakdown::from_items(items)
}
