//! Orders: records, the orders-view query, lifecycle and store

pub mod filter;
pub mod lifecycle;
pub mod model;
pub mod query;
pub mod sort;
pub mod store;
pub mod summary;

pub use filter::{OrderCriteria, OrderFilter};
pub use lifecycle::OrderPatch;
pub use model::{CustomerRef, Order, OrderItem, OrderStatus, PaymentMethod};
pub use query::{query, query_all_pages};
pub use sort::OrderSortKey;
pub use store::OrderStore;
pub use summary::DashboardSummary;
