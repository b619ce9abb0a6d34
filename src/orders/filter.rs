//! Order list filter

use serde::{Deserialize, Serialize};

use crate::core::filter::{Choice, Criteria, DateRange, ResolvedDateRange, TextSearch};
use crate::orders::model::{Order, OrderStatus};

/// Filter state of the orders view
///
/// Built fresh from user input on every change. Serializes to the same
/// camelCase shape the dashboard keeps in its view state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderFilter {
    pub status: Choice<OrderStatus>,
    pub date_range: DateRange,
    pub search_query: String,
    /// Category name, `None` (or empty) for no category constraint
    pub product_category: Option<String>,
}

impl OrderFilter {
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Choice::Only(status);
        self
    }

    pub fn with_search(mut self, query: &str) -> Self {
        self.search_query = query.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.product_category = Some(category.to_string());
        self
    }

    pub fn with_date_range(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.date_range = DateRange::new(start, end);
        self
    }

    /// Whether every constraint is off
    pub fn is_empty(&self) -> bool {
        *self == OrderFilter::default()
    }

    /// Parse bounds and normalize the search text once per query
    pub fn compile(&self) -> OrderCriteria {
        OrderCriteria {
            status: self.status,
            created: self.date_range.resolve(),
            category: self
                .product_category
                .as_deref()
                .filter(|c| !c.is_empty())
                .map(String::from),
            search: TextSearch::new(&self.search_query),
        }
    }
}

/// Compiled [`OrderFilter`]
///
/// Stages are evaluated in a fixed order: status, date range, category,
/// search. Each stage only narrows the set, and evaluation short-circuits
/// at the first stage an order fails.
#[derive(Debug, Clone)]
pub struct OrderCriteria {
    status: Choice<OrderStatus>,
    created: ResolvedDateRange,
    category: Option<String>,
    search: TextSearch,
}

impl OrderCriteria {
    fn status_matches(&self, order: &Order) -> bool {
        self.status.admits(&order.status)
    }

    fn date_matches(&self, order: &Order) -> bool {
        self.created.contains(&order.created_at)
    }

    fn category_matches(&self, order: &Order) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| order.has_category(category))
    }

    fn search_matches(&self, order: &Order) -> bool {
        if self.search.is_empty() {
            return true;
        }
        self.search.hit_any([
            order.id.as_str(),
            order.customer.name.as_str(),
            order.customer.email.as_str(),
        ]) || order
            .items
            .iter()
            .any(|item| self.search.hit(&item.product.name))
    }
}

impl Criteria<Order> for OrderCriteria {
    fn matches(&self, order: &Order) -> bool {
        self.status_matches(order)
            && self.date_matches(order)
            && self.category_matches(order)
            && self.search_matches(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_filter_is_empty() {
        assert!(OrderFilter::default().is_empty());
        assert!(!OrderFilter::default().with_search("x").is_empty());
    }

    #[test]
    fn test_filter_wire_format() {
        let filter: OrderFilter = serde_json::from_value(json!({
            "status": "pending",
            "dateRange": {"start": "2024-03-01", "end": null},
            "searchQuery": "cafe",
            "productCategory": null
        }))
        .unwrap();
        assert_eq!(filter.status, Choice::Only(OrderStatus::Pending));
        assert_eq!(filter.date_range.start.as_deref(), Some("2024-03-01"));
        assert_eq!(filter.product_category, None);
    }

    #[test]
    fn test_missing_keys_default_to_no_constraint() {
        let filter: OrderFilter = serde_json::from_value(json!({"status": "all"})).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_empty_category_is_no_constraint() {
        let criteria = OrderFilter::default().with_category("").compile();
        assert!(criteria.category.is_none());
    }
}
