//! Sample data for the dashboard views
//!
//! Order dates are relative to a caller-supplied `now`, so tests can pin the
//! clock and the demo can use the real one.

mod catalog;
mod orders;

pub use catalog::{sample_customers, sample_products, sample_routes};
pub use orders::{orders_from_json, sample_orders};
