//! Dashboard headline figures

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::filter::MatchAll;
use crate::core::query::{self, PageRequest};
use crate::orders::model::{Order, OrderStatus};
use crate::orders::sort::OrderSortKey;

/// Number of orders shown in the "recent orders" panel
pub const RECENT_ORDERS: usize = 5;

/// Figures shown on the dashboard landing page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Orders whose `createdAt` falls on `today` (UTC)
    pub today_orders: usize,
    /// Pending plus preparing orders
    pub in_progress: usize,
    pub total_revenue: f64,
    pub today_revenue: f64,
    /// Newest orders first
    pub recent_orders: Vec<Order>,
}

impl DashboardSummary {
    pub fn compute(orders: &[Order], today: NaiveDate) -> Self {
        let created_today = |order: &&Order| {
            order
                .created_at
                .instant()
                .is_some_and(|instant| instant.date_naive() == today)
        };

        let today_orders: Vec<&Order> = orders.iter().filter(created_today).collect();
        let in_progress = orders
            .iter()
            .filter(|o| matches!(o.status, OrderStatus::Pending | OrderStatus::Preparing))
            .count();

        let recent = query::run(
            orders,
            &MatchAll,
            OrderSortKey::default_config(),
            PageRequest::first(RECENT_ORDERS),
        );

        Self {
            today_orders: today_orders.len(),
            in_progress,
            total_revenue: orders.iter().map(|o| o.total).sum(),
            today_revenue: today_orders.iter().map(|o| o.total).sum(),
            recent_orders: recent.items,
        }
    }
}
