//! Budget breakdown value types.
//!
//! A breakdown is a pure value: four categories of line items plus a grand
//! total. Totals are computed on construction and never stored separately
//! from the items they summarize. Deserialization re-checks every total and
//! rejects a breakdown whose totals disagree with its items.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{sum_costs, Cost, ValidationError};

/// One priced line in a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLineItem {
    name: String,
    cost: Cost,
    description: String,
}

impl CostLineItem {
    pub(crate) fn new(name: impl Into<String>, cost: Cost, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Ordered line items and their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CategorySnapshot")]
pub struct CategoryBreakdown {
    total: Cost,
    items: Vec<CostLineItem>,
}

impl CategoryBreakdown {
    /// Builds a category whose total is the sum of its items.
    pub fn from_items(items: Vec<CostLineItem>) -> Self {
        let total = sum_costs(items.iter().map(CostLineItem::cost));
        Self { total, items }
    }

    /// A category with no items and a zero total.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Cost {
        self.total
    }

    pub fn items(&self) -> &[CostLineItem] {
        &self.items
    }

    /// Finds an item by its display name.
    pub fn item(&self, name: &str) -> Option<&CostLineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Returns true when the stored total equals the sum of the items.
    pub fn is_consistent(&self) -> bool {
        self.total == sum_costs(self.items.iter().map(CostLineItem::cost))
    }
}

/// The four budget categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Venue,
    Catering,
    Services,
    Miscellaneous,
}

impl BudgetCategory {
    /// Every category, in display order.
    pub const ALL: [BudgetCategory; 4] = [
        BudgetCategory::Venue,
        BudgetCategory::Catering,
        BudgetCategory::Services,
        BudgetCategory::Miscellaneous,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            BudgetCategory::Venue => "Venue",
            BudgetCategory::Catering => "Catering",
            BudgetCategory::Services => "Services",
            BudgetCategory::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Category-grouped costs and the grand total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BreakdownSnapshot")]
pub struct BudgetBreakdown {
    venue: CategoryBreakdown,
    catering: CategoryBreakdown,
    services: CategoryBreakdown,
    miscellaneous: CategoryBreakdown,
    grand_total: Cost,
}

impl BudgetBreakdown {
    /// Assembles a breakdown; the grand total is the sum of category totals.
    pub fn from_categories(
        venue: CategoryBreakdown,
        catering: CategoryBreakdown,
        services: CategoryBreakdown,
        miscellaneous: CategoryBreakdown,
    ) -> Self {
        let grand_total = sum_costs([
            venue.total,
            catering.total,
            services.total,
            miscellaneous.total,
        ]);
        Self {
            venue,
            catering,
            services,
            miscellaneous,
            grand_total,
        }
    }

    /// The result for incomplete parameters: every category empty, total 0.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn venue(&self) -> &CategoryBreakdown {
        &self.venue
    }

    pub fn catering(&self) -> &CategoryBreakdown {
        &self.catering
    }

    pub fn services(&self) -> &CategoryBreakdown {
        &self.services
    }

    pub fn miscellaneous(&self) -> &CategoryBreakdown {
        &self.miscellaneous
    }

    pub fn grand_total(&self) -> Cost {
        self.grand_total
    }

    pub fn category(&self, category: BudgetCategory) -> &CategoryBreakdown {
        match category {
            BudgetCategory::Venue => &self.venue,
            BudgetCategory::Catering => &self.catering,
            BudgetCategory::Services => &self.services,
            BudgetCategory::Miscellaneous => &self.miscellaneous,
        }
    }

    /// Iterates the categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = (BudgetCategory, &CategoryBreakdown)> {
        BudgetCategory::ALL
            .into_iter()
            .map(move |category| (category, self.category(category)))
    }

    /// Returns true when every category total matches its items and the
    /// grand total matches the categories.
    pub fn is_consistent(&self) -> bool {
        let category_sum = sum_costs(self.categories().map(|(_, c)| c.total));
        self.categories().all(|(_, c)| c.is_consistent()) && category_sum == self.grand_total
    }

    /// Returns true for the degenerate all-empty breakdown.
    pub fn is_empty(&self) -> bool {
        self.grand_total == 0 && self.categories().all(|(_, c)| c.items.is_empty())
    }
}

/// Unchecked wire form of a category.
#[derive(Deserialize)]
struct CategorySnapshot {
    total: Cost,
    #[serde(default)]
    items: Vec<CostLineItem>,
}

impl TryFrom<CategorySnapshot> for CategoryBreakdown {
    type Error = ValidationError;

    fn try_from(snapshot: CategorySnapshot) -> Result<Self, Self::Error> {
        let category = Self::from_items(snapshot.items);
        if category.total != snapshot.total {
            return Err(ValidationError::invalid_format(
                "total",
                format!(
                    "stored total {} does not match item sum {}",
                    snapshot.total, category.total
                ),
            ));
        }
        Ok(category)
    }
}

/// Unchecked wire form of a breakdown. Categories are already checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BreakdownSnapshot {
    venue: CategoryBreakdown,
    catering: CategoryBreakdown,
    services: CategoryBreakdown,
    miscellaneous: CategoryBreakdown,
    grand_total: Cost,
}

impl TryFrom<BreakdownSnapshot> for BudgetBreakdown {
    type Error = ValidationError;

    fn try_from(snapshot: BreakdownSnapshot) -> Result<Self, Self::Error> {
        let breakdown = Self::from_categories(
            snapshot.venue,
            snapshot.catering,
            snapshot.services,
            snapshot.miscellaneous,
        );
        if breakdown.grand_total != snapshot.grand_total {
            return Err(ValidationError::invalid_format(
                "grandTotal",
                format!(
                    "stored grand total {} does not match category sum {}",
                    snapshot.grand_total, breakdown.grand_total
                ),
            ));
        }
        Ok(breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, cost: Cost) -> CostLineItem {
        CostLineItem::new(name, cost, "")
    }

    #[test]
    fn category_total_is_sum_of_items() {
        let category = CategoryBreakdown::from_items(vec![item("A", 100), item("B", 250)]);
        assert_eq!(category.total(), 350);
        assert_eq!(category.items().len(), 2);
        assert!(category.is_consistent());
    }

    #[test]
    fn category_item_lookup_by_name() {
        let category = CategoryBreakdown::from_items(vec![item("Setup Time", 200)]);
        assert_eq!(category.item("Setup Time").map(CostLineItem::cost), Some(200));
        assert!(category.item("Cleanup Time").is_none());
    }

    #[test]
    fn grand_total_is_sum_of_categories() {
        let breakdown = BudgetBreakdown::from_categories(
            CategoryBreakdown::from_items(vec![item("V", 10)]),
            CategoryBreakdown::from_items(vec![item("C", 20)]),
            CategoryBreakdown::empty(),
            CategoryBreakdown::from_items(vec![item("M", 5), item("N", 1)]),
        );
        assert_eq!(breakdown.grand_total(), 36);
        assert!(breakdown.is_consistent());
        assert!(!breakdown.is_empty());
    }

    #[test]
    fn empty_breakdown_is_all_zero() {
        let breakdown = BudgetBreakdown::empty();
        assert_eq!(breakdown.grand_total(), 0);
        for (_, category) in breakdown.categories() {
            assert_eq!(category.total(), 0);
            assert!(category.items().is_empty());
        }
        assert!(breakdown.is_empty());
        assert!(breakdown.is_consistent());
    }

    #[test]
    fn categories_iterate_in_display_order() {
        let breakdown = BudgetBreakdown::empty();
        let order: Vec<_> = breakdown.categories().map(|(c, _)| c).collect();
        assert_eq!(order, BudgetCategory::ALL.to_vec());
    }

    #[test]
    fn tampered_category_total_is_rejected() {
        let json = r#"{
            "venue": {"total": 99, "items": [{"name": "V", "cost": 10, "description": ""}]},
            "catering": {"total": 0, "items": []},
            "services": {"total": 0, "items": []},
            "miscellaneous": {"total": 0, "items": []},
            "grandTotal": 99
        }"#;
        let err = serde_json::from_str::<BudgetBreakdown>(json).unwrap_err();
        assert!(err.to_string().contains("does not match item sum 10"));
    }

    #[test]
    fn tampered_grand_total_is_rejected() {
        let mut json = serde_json::to_value(BudgetBreakdown::from_categories(
            CategoryBreakdown::from_items(vec![item("V", 2000)]),
            CategoryBreakdown::empty(),
            CategoryBreakdown::empty(),
            CategoryBreakdown::from_items(vec![item("M", 80)]),
        ))
        .unwrap();
        json["grandTotal"] = serde_json::json!(1);

        let err = serde_json::from_value::<BudgetBreakdown>(json).unwrap_err();
        assert!(err.to_string().contains("does not match category sum 2080"));
    }

    #[test]
    fn consistent_breakdown_survives_serde() {
        let breakdown = BudgetBreakdown::from_categories(
            CategoryBreakdown::from_items(vec![item("V", 10), item("S", 3)]),
            CategoryBreakdown::from_items(vec![item("C", 20)]),
            CategoryBreakdown::empty(),
            CategoryBreakdown::empty(),
        );
        let json = serde_json::to_string(&breakdown).unwrap();
        let restored: BudgetBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, breakdown);
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let breakdown = BudgetBreakdown::from_categories(
            CategoryBreakdown::from_items(vec![item("V", Cost::MAX), item("S", 1)]),
            CategoryBreakdown::from_items(vec![item("C", Cost::MAX)]),
            CategoryBreakdown::empty(),
            CategoryBreakdown::empty(),
        );
        assert_eq!(breakdown.venue().total(), Cost::MAX);
        assert_eq!(breakdown.grand_total(), Cost::MAX);
        assert!(breakdown.is_consistent());
    }

    #[test]
    fn serializes_with_camel_case_grand_total() {
        let json = serde_json::to_value(BudgetBreakdown::empty()).unwrap();
        assert_eq!(json["grandTotal"], 0);
        assert!(json["venue"]["items"].as_array().unwrap().is_empty());
        assert_eq!(json["miscellaneous"]["total"], 0);
    }
}
