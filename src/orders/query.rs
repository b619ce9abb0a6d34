//! Orders view query

use crate::core::query::{self, Page, PageRequest, SortConfig};
use crate::orders::filter::OrderFilter;
use crate::orders::model::Order;
use crate::orders::sort::OrderSortKey;

/// Filter, search, sort and paginate orders
///
/// Pure: the same arguments always yield the same page, and `orders` is
/// left untouched. `page` is clamped into `[1, total_pages]` and a
/// `page_size` of zero is treated as one.
pub fn query(
    orders: &[Order],
    filter: &OrderFilter,
    sort: SortConfig<OrderSortKey>,
    page: usize,
    page_size: usize,
) -> Page<Order> {
    query::run(orders, &filter.compile(), sort, PageRequest::new(page, page_size))
}

/// Every page of the filtered and sorted orders, in order
pub fn query_all_pages(
    orders: &[Order],
    filter: &OrderFilter,
    sort: SortConfig<OrderSortKey>,
    page_size: usize,
) -> Vec<Page<Order>> {
    query::run_all_pages(orders, &filter.compile(), sort, page_size)
}
