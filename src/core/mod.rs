//! Core module containing the record abstraction and the generic query pipeline

pub mod entity;
pub mod error;
pub mod field;
pub mod filter;
pub mod query;
pub mod store;
pub mod validation;

pub use entity::Record;
pub use error::{ConfigError, FieldError, StoreError, SunriseError, ValidationError};
pub use field::{FieldFormat, Timestamp};
pub use filter::{Choice, Criteria, DateRange, MatchAll, ResolvedDateRange, TextSearch};
pub use query::{Page, PageRequest, PaginationMeta, SortConfig, SortDirection, SortKey};
pub use store::{Collection, QueryableStore};
pub use validation::{FieldChecks, ValidateRecord};
