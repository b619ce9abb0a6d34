//! Customer accounts and the customer directory query

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::field::{FieldFormat, Timestamp};
use crate::core::filter::{Choice, Criteria, TextSearch};
use crate::core::query::{self, Page, PageRequest, SortConfig, SortKey};
use crate::core::validation::validators::{format, required};
use crate::core::{FieldChecks, Record, ValidateRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Retail,
    Wholesale,
    Corporate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

/// A customer account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub customer_type: CustomerType,
    pub address: String,
    pub total_orders: u32,
    pub last_order: Timestamp,
    pub status: CustomerStatus,
    pub joined_date: Timestamp,
}

impl Record for Customer {
    fn entity_type() -> &'static str {
        "customer"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl ValidateRecord for Customer {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn check_fields(&self, checks: &mut FieldChecks<'_>) {
        checks
            .check("id", self.id.as_str(), required())
            .check("name", self.name.as_str(), required())
            .check("email", self.email.as_str(), format(FieldFormat::Email))
            .check("phone", self.phone.as_str(), format(FieldFormat::Phone));
    }
}

/// Directory filter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerFilter {
    #[serde(rename = "type")]
    pub customer_type: Choice<CustomerType>,
    pub status: Choice<CustomerStatus>,
    pub search_query: String,
}

impl CustomerFilter {
    pub fn compile(&self) -> CustomerCriteria {
        CustomerCriteria {
            customer_type: self.customer_type,
            status: self.status,
            search: TextSearch::new(&self.search_query),
        }
    }
}

/// Compiled [`CustomerFilter`]
#[derive(Debug, Clone)]
pub struct CustomerCriteria {
    customer_type: Choice<CustomerType>,
    status: Choice<CustomerStatus>,
    search: TextSearch,
}

impl Criteria<Customer> for CustomerCriteria {
    fn matches(&self, customer: &Customer) -> bool {
        self.customer_type.admits(&customer.customer_type)
            && self.status.admits(&customer.status)
            && self.search.hit_any([
                customer.name.as_str(),
                customer.email.as_str(),
                customer.phone.as_str(),
            ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerSortKey {
    #[default]
    Name,
    Email,
    TotalOrders,
    LastOrder,
    JoinedDate,
}

fn by_name(a: &Customer, b: &Customer) -> Ordering {
    a.name.cmp(&b.name)
}

fn by_email(a: &Customer, b: &Customer) -> Ordering {
    a.email.cmp(&b.email)
}

fn by_total_orders(a: &Customer, b: &Customer) -> Ordering {
    a.total_orders.cmp(&b.total_orders)
}

fn by_last_order(a: &Customer, b: &Customer) -> Ordering {
    a.last_order.cmp_instant(&b.last_order)
}

fn by_joined_date(a: &Customer, b: &Customer) -> Ordering {
    a.joined_date.cmp_instant(&b.joined_date)
}

impl SortKey<Customer> for CustomerSortKey {
    fn comparator(self) -> fn(&Customer, &Customer) -> Ordering {
        match self {
            CustomerSortKey::Name => by_name,
            CustomerSortKey::Email => by_email,
            CustomerSortKey::TotalOrders => by_total_orders,
            CustomerSortKey::LastOrder => by_last_order,
            CustomerSortKey::JoinedDate => by_joined_date,
        }
    }
}

/// Filter, sort and paginate the customer directory
pub fn query(
    customers: &[Customer],
    filter: &CustomerFilter,
    sort: SortConfig<CustomerSortKey>,
    request: PageRequest,
) -> Page<Customer> {
    query::run(customers, &filter.compile(), sort, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer(id: &str, name: &str, kind: CustomerType, status: CustomerStatus, orders: u32) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id.to_lowercase()),
            phone: "(555) 000-0000".to_string(),
            customer_type: kind,
            address: "1 Main St".to_string(),
            total_orders: orders,
            last_order: Timestamp::parse("2024-03-15"),
            status,
            joined_date: Timestamp::parse("2023-01-15"),
        }
    }

    #[test]
    fn test_type_and_status_filters_combine() {
        let customers = vec![
            customer("C1", "Alpha", CustomerType::Retail, CustomerStatus::Active, 3),
            customer("C2", "Beta", CustomerType::Corporate, CustomerStatus::Active, 9),
            customer("C3", "Gamma", CustomerType::Corporate, CustomerStatus::Inactive, 1),
        ];
        let filter = CustomerFilter {
            customer_type: Choice::Only(CustomerType::Corporate),
            status: Choice::Only(CustomerStatus::Active),
            ..Default::default()
        };
        let page = query(&customers, &filter, SortConfig::default(), PageRequest::default());
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "C2");
    }

    #[test]
    fn test_sort_by_total_orders_desc() {
        let customers = vec![
            customer("C1", "Alpha", CustomerType::Retail, CustomerStatus::Active, 3),
            customer("C2", "Beta", CustomerType::Retail, CustomerStatus::Active, 9),
        ];
        let page = query(
            &customers,
            &CustomerFilter::default(),
            SortConfig::desc(CustomerSortKey::TotalOrders),
            PageRequest::default(),
        );
        assert_eq!(page.items[0].id, "C2");
    }

    #[test]
    fn test_filter_wire_format() {
        let filter: CustomerFilter = serde_json::from_value(json!({
            "type": "wholesale",
            "status": "all",
            "searchQuery": "brew"
        }))
        .unwrap();
        assert_eq!(filter.customer_type, Choice::Only(CustomerType::Wholesale));
        assert!(filter.status.is_all());
    }
}
