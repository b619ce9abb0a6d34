//! Order sort keys

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::query::{SortConfig, SortKey};
use crate::orders::model::Order;

/// Columns the orders view can sort by
///
/// `CustomerName` and `TotalItems` are derived: the customer's name on the
/// order snapshot and the sum of line quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderSortKey {
    Id,
    CustomerName,
    CustomerEmail,
    Status,
    #[default]
    CreatedAt,
    DeliveryDate,
    Total,
    TotalItems,
    PaymentMethod,
}

impl OrderSortKey {
    /// Newest orders first
    pub fn default_config() -> SortConfig<OrderSortKey> {
        SortConfig::desc(OrderSortKey::CreatedAt)
    }
}

fn by_id(a: &Order, b: &Order) -> Ordering {
    a.id.cmp(&b.id)
}

fn by_customer_name(a: &Order, b: &Order) -> Ordering {
    a.customer.name.cmp(&b.customer.name)
}

fn by_customer_email(a: &Order, b: &Order) -> Ordering {
    a.customer.email.cmp(&b.customer.email)
}

fn by_status(a: &Order, b: &Order) -> Ordering {
    a.status.as_str().cmp(b.status.as_str())
}

fn by_created_at(a: &Order, b: &Order) -> Ordering {
    a.created_at.cmp_instant(&b.created_at)
}

fn by_delivery_date(a: &Order, b: &Order) -> Ordering {
    a.delivery_date.cmp_instant(&b.delivery_date)
}

fn by_total(a: &Order, b: &Order) -> Ordering {
    a.total.total_cmp(&b.total)
}

fn by_total_items(a: &Order, b: &Order) -> Ordering {
    a.total_items().cmp(&b.total_items())
}

fn by_payment_method(a: &Order, b: &Order) -> Ordering {
    a.payment_method.as_str().cmp(b.payment_method.as_str())
}

impl SortKey<Order> for OrderSortKey {
    fn comparator(self) -> fn(&Order, &Order) -> Ordering {
        match self {
            OrderSortKey::Id => by_id,
            OrderSortKey::CustomerName => by_customer_name,
            OrderSortKey::CustomerEmail => by_customer_email,
            OrderSortKey::Status => by_status,
            OrderSortKey::CreatedAt => by_created_at,
            OrderSortKey::DeliveryDate => by_delivery_date,
            OrderSortKey::Total => by_total,
            OrderSortKey::TotalItems => by_total_items,
            OrderSortKey::PaymentMethod => by_payment_method,
        }
    }
}
