//! Order store

use crate::core::error::{StoreError, SunriseError};
use crate::core::query::{Page, SortConfig};
use crate::core::store::{Collection, QueryableStore};
use crate::core::validation::validate_all;
use crate::orders::filter::OrderFilter;
use crate::orders::lifecycle::OrderPatch;
use crate::orders::model::{Order, OrderStatus};
use crate::orders::query;
use crate::orders::sort::OrderSortKey;
use crate::storage::InMemoryStore;

/// Store holding the orders snapshot behind the orders view
///
/// Every write returns the new snapshot; queries always run against a
/// complete snapshot and never observe a partial write.
#[derive(Clone, Default)]
pub struct OrderStore {
    inner: InMemoryStore<Order>,
}

impl OrderStore {
    /// Create a store without validating the records
    pub fn new(orders: impl Into<Collection<Order>>) -> Self {
        Self {
            inner: InMemoryStore::new(orders),
        }
    }

    /// Validate every record, then create the store
    pub fn from_records(orders: Vec<Order>) -> Result<Self, SunriseError> {
        validate_all(&orders)?;
        Ok(Self::new(orders))
    }

    pub fn get(&self, id: &str) -> Option<Order> {
        self.inner.get(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Apply `patch` to one order and return the new collection
    pub fn replace_order(&self, id: &str, patch: &OrderPatch) -> Result<Collection<Order>, StoreError> {
        self.inner.replace(id, |order| patch.apply(order))
    }

    /// Move an order one step forward in its lifecycle
    pub fn advance_status(&self, id: &str) -> Result<Collection<Order>, StoreError> {
        self.inner.try_replace(id, |order| {
            let next = order.status.next().ok_or_else(|| StoreError::InvalidTransition {
                id: order.id.clone(),
                from: order.status.to_string(),
                to: "next".to_string(),
            })?;
            tracing::debug!(id = %order.id, from = %order.status, to = %next, "advancing order");
            Ok(OrderPatch::status(next).apply(order))
        })
    }

    /// Cancel an order that has not reached a terminal status
    pub fn cancel(&self, id: &str) -> Result<Collection<Order>, StoreError> {
        self.inner.try_replace(id, |order| {
            if order.status.is_terminal() {
                return Err(StoreError::InvalidTransition {
                    id: order.id.clone(),
                    from: order.status.to_string(),
                    to: OrderStatus::Cancelled.to_string(),
                });
            }
            Ok(OrderPatch::status(OrderStatus::Cancelled).apply(order))
        })
    }

    /// Query the current snapshot for the orders view
    pub fn query_page(
        &self,
        filter: &OrderFilter,
        sort: SortConfig<OrderSortKey>,
        page: usize,
        page_size: usize,
    ) -> Page<Order> {
        query::query(&self.snapshot(), filter, sort, page, page_size)
    }
}

impl QueryableStore<Order> for OrderStore {
    fn snapshot(&self) -> Collection<Order> {
        self.inner.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_orders;
    use chrono::{TimeZone, Utc};

    fn store() -> OrderStore {
        let now = Utc.with_ymd_and_hms(2024, 3, 16, 9, 30, 0).unwrap();
        OrderStore::from_records(sample_orders(now)).unwrap()
    }

    #[test]
    fn test_advance_walks_lifecycle() {
        let store = store();
        store.advance_status("ORD-2023-003").unwrap();
        assert_eq!(store.get("ORD-2023-003").unwrap().status, OrderStatus::Delivered);

        let err = store.advance_status("ORD-2023-003").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_cancel_rejected_once_terminal() {
        let store = store();
        let before = store.snapshot();

        let err = store.cancel("ORD-2023-004").unwrap_err();
        assert!(matches!(err, StoreError::InvalidTransition { ref from, .. } if from == "delivered"));
        assert!(store.snapshot().same_snapshot(&before));

        let after = store.cancel("ORD-2023-001").unwrap();
        assert_eq!(after.get("ORD-2023-001").unwrap().status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_unknown_id_not_found() {
        let err = store().advance_status("ORD-404").unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                entity_type: "order",
                id: "ORD-404".to_string()
            }
        );
    }

    #[test]
    fn test_from_records_rejects_invalid() {
        let mut orders = sample_orders(Utc::now());
        orders[2].total = -1.0;
        let err = OrderStore::from_records(orders).err().unwrap();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
