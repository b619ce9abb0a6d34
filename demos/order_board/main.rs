//! Order board demo
//!
//! Loads the sample orders into a store, runs a few orders-view queries and
//! prints each page as JSON.
//!
//! ```sh
//! RUST_LOG=sunrise=debug cargo run --example order_board -- demos/order_board/dashboard.yaml
//! ```

use anyhow::Context;
use sunrise::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DashboardConfig::from_yaml_file(&path)
            .with_context(|| format!("loading dashboard config from {path}"))?,
        None => DashboardConfig::default(),
    };
    tracing::info!(page_size = config.page_size, "dashboard config ready");

    let now = Utc::now();
    let store = OrderStore::from_records(sample_orders(now))?;

    let summary = DashboardSummary::compute(&store.snapshot(), now.date_naive());
    println!(
        "today: {} orders, {} in progress, ${:.2} revenue",
        summary.today_orders, summary.in_progress, summary.today_revenue
    );

    let pending = OrderFilter::default().with_status(OrderStatus::Pending);
    print_page(
        "pending orders",
        &store.query_page(&pending, config.orders.default_sort, 1, config.page_size),
    )?;

    let pastries = OrderFilter::default().with_category("pastry");
    print_page(
        "pastry orders by total",
        &store.query_page(&pastries, SortConfig::desc(OrderSortKey::Total), 1, config.page_size),
    )?;

    store.advance_status("ORD-2023-001")?;
    if let Err(err) = store.cancel("ORD-2023-004") {
        tracing::warn!(code = SunriseError::from(err.clone()).error_code(), "{err}");
    }

    let preparing = OrderFilter::default().with_status(OrderStatus::Preparing);
    print_page(
        "preparing after advance",
        &store.query_page(&preparing, config.orders.default_sort, 1, config.page_size),
    )?;

    Ok(())
}

fn print_page(title: &str, page: &Page<Order>) -> Result<()> {
    let ids: Vec<&str> = page.items.iter().map(|order| order.id.as_str()).collect();
    println!("\n== {title} ({} of {}) ==", ids.len(), page.pagination.total);
    println!("{}", serde_json::to_string_pretty(&page.pagination)?);
    println!("{}", ids.join(", "));
    Ok(())
}
