use anyhow::Context;
use chrono::{DateTime, Duration, Utc};

use crate::core::field::Timestamp;
use crate::entities::product::{Product, ProductCategory};
use crate::orders::model::{CustomerRef, Order, OrderItem, OrderStatus, PaymentMethod};

fn days_ago(now: DateTime<Utc>, days: i64) -> Timestamp {
    Timestamp::from_instant(now - Duration::days(days))
}

fn days_from_now(now: DateTime<Utc>, days: i64) -> Timestamp {
    Timestamp::from_instant(now + Duration::days(days))
}

fn customer(id: &str, name: &str, email: &str, phone: &str) -> CustomerRef {
    CustomerRef {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
    }
}

fn line(id: &str, name: &str, price: f64, category: ProductCategory, quantity: u32) -> OrderItem {
    OrderItem {
        product: Product::new(id, name, price, category),
        quantity,
        notes: None,
    }
}

struct Draft {
    id: &'static str,
    customer: CustomerRef,
    items: Vec<OrderItem>,
    status: OrderStatus,
    created_at: Timestamp,
    delivery_date: Timestamp,
    total: f64,
    payment_method: PaymentMethod,
    notes: Option<&'static str>,
}

impl From<Draft> for Order {
    fn from(draft: Draft) -> Self {
        Order {
            id: draft.id.to_string(),
            customer: draft.customer,
            items: draft.items,
            status: draft.status,
            created_at: draft.created_at,
            delivery_date: draft.delivery_date,
            total: draft.total,
            payment_method: draft.payment_method,
            notes: draft.notes.map(str::to_string),
        }
    }
}

/// The ten sample orders, dated relative to `now`
pub fn sample_orders(now: DateTime<Utc>) -> Vec<Order> {
    use OrderStatus::*;
    use PaymentMethod::*;
    use ProductCategory::*;

    let drafts = vec![
        Draft {
            id: "ORD-2023-001",
            customer: customer("CUST-001", "Cafe Morning Brew", "orders@morningbrew.com", "(555) 123-4567"),
            items: vec![
                line("PRD-001", "Sourdough Loaf", 6.50, Loaf, 20),
                line("PRD-002", "Ciabatta Rolls", 4.25, Roll, 30),
            ],
            status: Pending,
            created_at: days_ago(now, 0),
            delivery_date: days_from_now(now, 1),
            total: 257.50,
            payment_method: Card,
            notes: Some("Please deliver before 7 AM"),
        },
        Draft {
            id: "ORD-2023-002",
            customer: customer("CUST-002", "Harmony Bistro", "kitchen@harmonybistro.com", "(555) 234-5678"),
            items: vec![
                line("PRD-003", "Whole Wheat Bread", 5.75, Loaf, 15),
                line("PRD-004", "Croissants", 2.95, Pastry, 40),
            ],
            status: Preparing,
            created_at: days_ago(now, 1),
            delivery_date: days_from_now(now, 1),
            total: 204.25,
            payment_method: Online,
            notes: None,
        },
        Draft {
            id: "ORD-2023-003",
            customer: customer("CUST-003", "Green Market Grocery", "orders@greenmarket.com", "(555) 345-6789"),
            items: vec![
                line("PRD-005", "Multigrain Loaf", 7.25, Loaf, 25),
                line("PRD-006", "Baguettes", 3.50, Specialty, 30),
                line("PRD-007", "Dinner Rolls", 4.00, Roll, 60),
            ],
            status: Ready,
            created_at: days_ago(now, 2),
            delivery_date: days_from_now(now, 0),
            total: 501.25,
            payment_method: Card,
            notes: None,
        },
        Draft {
            id: "ORD-2023-004",
            customer: customer("CUST-004", "Sunset Restaurant", "chef@sunsetrestaurant.com", "(555) 456-7890"),
            items: vec![
                line("PRD-008", "Focaccia", 8.50, Specialty, 10),
                line("PRD-009", "Brioche Buns", 5.25, Roll, 24),
            ],
            status: Delivered,
            created_at: days_ago(now, 3),
            delivery_date: days_ago(now, 1),
            total: 211.00,
            payment_method: Online,
            notes: None,
        },
        Draft {
            id: "ORD-2023-005",
            customer: customer("CUST-005", "Urban Eats Catering", "events@urbaneats.com", "(555) 567-8901"),
            items: vec![
                line("PRD-010", "Rye Bread", 6.75, Loaf, 12),
                line("PRD-011", "Pain au Chocolat", 3.25, Pastry, 50),
            ],
            status: Cancelled,
            created_at: days_ago(now, 4),
            delivery_date: days_ago(now, 1),
            total: 243.50,
            payment_method: Card,
            notes: Some("Customer cancelled due to event reschedule"),
        },
        Draft {
            id: "ORD-2023-006",
            customer: customer("CUST-006", "Sunrise Hotel", "kitchen@sunrisehotel.com", "(555) 678-9012"),
            items: vec![
                line("PRD-012", "French Bread", 4.95, Loaf, 35),
                line("PRD-013", "Cinnamon Rolls", 3.75, Pastry, 40),
            ],
            status: Pending,
            created_at: days_ago(now, 0),
            delivery_date: days_from_now(now, 2),
            total: 323.25,
            payment_method: Online,
            notes: None,
        },
        Draft {
            id: "ORD-2023-007",
            customer: customer("CUST-007", "Fresh Start Deli", "manager@freshstartdeli.com", "(555) 789-0123"),
            items: vec![line("PRD-014", "Sandwich Bread", 5.50, Loaf, 45)],
            status: Preparing,
            created_at: days_ago(now, 1),
            delivery_date: days_from_now(now, 1),
            total: 247.50,
            payment_method: Card,
            notes: None,
        },
        Draft {
            id: "ORD-2023-008",
            customer: customer("CUST-008", "Corner Coffee Shop", "orders@cornercoffee.com", "(555) 890-1234"),
            items: vec![
                line("PRD-015", "Blueberry Muffins", 3.50, Pastry, 60),
                line("PRD-016", "Bagels", 2.75, Roll, 48),
            ],
            status: Ready,
            created_at: days_ago(now, 2),
            delivery_date: days_from_now(now, 0),
            total: 342.00,
            payment_method: Online,
            notes: None,
        },
        Draft {
            id: "ORD-2023-009",
            customer: customer("CUST-009", "Riverside Restaurant", "chef@riversiderest.com", "(555) 901-2345"),
            items: vec![
                line("PRD-017", "Rustic Italian Loaf", 7.95, Loaf, 18),
                line("PRD-018", "Pretzel Buns", 4.50, Roll, 30),
            ],
            status: Delivered,
            created_at: days_ago(now, 5),
            delivery_date: days_ago(now, 2),
            total: 278.10,
            payment_method: Card,
            notes: None,
        },
        Draft {
            id: "ORD-2023-010",
            customer: customer("CUST-010", "Community Center", "events@communitycenter.org", "(555) 012-3456"),
            items: vec![
                line("PRD-019", "Challah", 8.25, Specialty, 10),
                line("PRD-020", "Assorted Rolls", 5.00, Roll, 100),
            ],
            status: Pending,
            created_at: days_ago(now, 0),
            delivery_date: days_from_now(now, 3),
            total: 582.50,
            payment_method: Online,
            notes: Some("For community fundraiser event"),
        },
    ];

    drafts.into_iter().map(Order::from).collect()
}

/// Parse a JSON array of orders in the wire format
pub fn orders_from_json(json: &str) -> anyhow::Result<Vec<Order>> {
    let orders: Vec<Order> = serde_json::from_str(json).context("failed to parse orders JSON")?;
    tracing::debug!(count = orders.len(), "orders loaded from JSON");
    Ok(orders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validate_all;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 16, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_sample_orders_are_valid() {
        let orders = sample_orders(now());
        assert_eq!(orders.len(), 10);
        assert!(validate_all(&orders).is_ok());
    }

    #[test]
    fn test_sample_status_mix() {
        let orders = sample_orders(now());
        let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();
        assert_eq!(count(OrderStatus::Pending), 3);
        assert_eq!(count(OrderStatus::Preparing), 2);
        assert_eq!(count(OrderStatus::Ready), 2);
        assert_eq!(count(OrderStatus::Delivered), 2);
        assert_eq!(count(OrderStatus::Cancelled), 1);
        assert_eq!(orders[9].total_items(), 110);
    }

    #[test]
    fn test_dates_are_relative_to_now() {
        let orders = sample_orders(now());
        assert_eq!(orders[0].created_at.instant(), Some(now()));
        assert_eq!(orders[8].created_at.instant(), Some(now() - Duration::days(5)));
        assert_eq!(orders[9].delivery_date.instant(), Some(now() + Duration::days(3)));
    }

    #[test]
    fn test_orders_from_json() {
        let json = serde_json::to_string(&sample_orders(now())).unwrap();
        let parsed = orders_from_json(&json).unwrap();
        assert_eq!(parsed, sample_orders(now()));

        let err = orders_from_json("{\"not\": \"a list\"}").unwrap_err();
        assert!(err.to_string().contains("failed to parse orders JSON"));
    }
}
