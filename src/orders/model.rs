//! Order records

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::field::{FieldFormat, Timestamp};
use crate::core::validation::validators::{format, non_negative, optional_format, positive, required};
use crate::core::{FieldChecks, Record, ValidateRecord};
use crate::entities::product::Product;

/// Order status
///
/// Orders move forward through pending → preparing → ready → delivered;
/// cancelled is reachable from any non-terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
    Online,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Online => "online",
        }
    }
}

/// Customer details copied onto the order when it was placed
///
/// This is a snapshot, not a live reference: later edits to the customer
/// account do not change existing orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// One order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: Product,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer: CustomerRef,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub delivery_date: Timestamp,
    pub total: f64,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Order {
    /// Sum of line quantities
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Whether any line is for a product in `category`
    pub fn has_category(&self, category: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.product.category.as_str() == category)
    }
}

impl Record for Order {
    fn entity_type() -> &'static str {
        "order"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl ValidateRecord for Order {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn check_fields(&self, checks: &mut FieldChecks<'_>) {
        checks
            .check("id", self.id.as_str(), required())
            .check("customer.name", self.customer.name.as_str(), required())
            .check("customer.email", self.customer.email.as_str(), format(FieldFormat::Email))
            .check("customer.phone", &self.customer.phone, optional_format(FieldFormat::Phone))
            .check("total", &self.total, non_negative());

        for (index, item) in self.items.iter().enumerate() {
            checks
                .check(&format!("items[{index}].quantity"), &item.quantity, positive())
                .check(&format!("items[{index}].product.price"), &item.product.price, non_negative());
        }
    }
}
