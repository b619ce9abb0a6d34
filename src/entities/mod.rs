//! Catalog entities queried by the dashboard alongside orders

pub mod customer;
pub mod delivery;
pub mod product;

pub use customer::{Customer, CustomerFilter, CustomerSortKey, CustomerStatus, CustomerType};
pub use delivery::{DeliveryRoute, RouteFilter, RouteSortKey, RouteStatus};
pub use product::{Product, ProductCategory, ProductFilter, ProductSortKey};
