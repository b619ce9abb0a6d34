//! # Sunrise Bakery
//!
//! Query engine behind the Sunrise Bakery operations dashboard: orders,
//! customers, products and delivery routes, each listed through the same
//! filter → sort → paginate pipeline.
//!
//! ## Features
//!
//! - **One Pipeline**: Filtering, stable sorting and clamped pagination shared by every view
//! - **Typed Filters**: `"all"`-aware choices, inclusive calendar-day date ranges, case-insensitive search
//! - **Closed Sort Keys**: Each sort column is an enum variant mapped to a named comparator
//! - **Snapshot Stores**: Writes publish a new immutable collection, reads never see a partial update
//! - **Order Lifecycle**: Guarded advance and cancel transitions on top of raw patches
//! - **Configuration-Based**: Page size and default sort from layered YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sunrise::prelude::*;
//!
//! let store = OrderStore::from_records(sample_orders(Utc::now()))?;
//!
//! let filter = OrderFilter::default()
//!     .with_status(OrderStatus::Pending)
//!     .with_search("cafe");
//! let page = store.query_page(&filter, SortConfig::desc(OrderSortKey::Total), 1, 10);
//!
//! for order in &page.items {
//!     println!("{} {}", order.id, order.customer.name);
//! }
//! store.advance_status("ORD-2023-001")?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod fixtures;
pub mod orders;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Choice, Collection, Criteria, DateRange, FieldFormat, MatchAll, Page, PageRequest,
        PaginationMeta, QueryableStore, Record, SortConfig, SortDirection, SortKey, TextSearch,
        Timestamp, ValidateRecord,
        error::{ConfigError, StoreError, SunriseError, ValidationError},
        query,
    };

    // === Orders ===
    pub use crate::orders::{
        DashboardSummary, Order, OrderFilter, OrderItem, OrderPatch, OrderSortKey, OrderStatus,
        OrderStore, PaymentMethod,
    };

    // === Catalog ===
    pub use crate::entities::{
        customer::{Customer, CustomerFilter, CustomerSortKey},
        delivery::{DeliveryRoute, RouteFilter, RouteSortKey},
        product::{Product, ProductCategory, ProductFilter, ProductSortKey},
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::{ConfigLayer, DashboardConfig};

    // === Fixtures ===
    pub use crate::fixtures::{
        orders_from_json, sample_customers, sample_orders, sample_products, sample_routes,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
}
