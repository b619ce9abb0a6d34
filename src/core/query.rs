//! Generic query pipeline: filter, sort and paginate
//!
//! Every list view runs the same three steps over an immutable slice of
//! records. What varies per entity is plugged in through two traits:
//!
//! - [`Criteria`]: the compiled filter, one predicate per record
//! - [`SortKey`]: a closed enum of sort keys, each naming a comparator
//!
//! # Example
//! ```rust,ignore
//! let page = query::run(
//!     &orders,
//!     &filter.compile(),
//!     SortConfig::desc(OrderSortKey::Total),
//!     PageRequest::new(1, 10),
//! );
//! assert!(page.pagination.total_pages >= 1);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::filter::Criteria;

/// Default number of records per page in list views
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Apply the direction to an ascending ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// A closed set of sort keys for records of type `T`
///
/// Each key maps to a named comparator with an explicit signature, so sort
/// dispatch never branches on field-name strings.
pub trait SortKey<T>: Copy {
    /// Ascending comparator for this key
    fn comparator(self) -> fn(&T, &T) -> Ordering;
}

/// Sort key and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig<K> {
    pub key: K,
    #[serde(default)]
    pub direction: SortDirection,
}

impl<K> SortConfig<K> {
    pub fn new(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn asc(key: K) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn desc(key: K) -> Self {
        Self::new(key, SortDirection::Desc)
    }
}

impl<K: PartialEq + Copy> SortConfig<K> {
    /// Sort-header click: the same key flips direction, anything else
    /// starts ascending
    pub fn clicked(self, key: K) -> Self {
        let direction = if self.key == key {
            self.direction.toggled()
        } else {
            SortDirection::Asc
        };
        Self { key, direction }
    }
}

impl<K: Default> Default for SortConfig<K> {
    fn default() -> Self {
        Self {
            key: K::default(),
            direction: SortDirection::Asc,
        }
    }
}

/// Requested page, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: usize,

    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    /// Page size, never below 1
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(default_page(), default_page_size())
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records on this page, in sorted order
    pub items: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Effective page number after clamping (starts at 1)
    pub page: usize,

    /// Number of records per page
    pub page_size: usize,

    /// Number of records that passed the filter
    pub total: usize,

    /// Total number of pages, at least 1 even when nothing matched
    pub total_pages: usize,

    pub has_next: bool,

    pub has_prev: bool,
}

impl PaginationMeta {
    /// Compute metadata, clamping `page` into `[1, total_pages]`
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index range of this page within the full sequence
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }
}

/// Stable sort of borrowed records by the given config
///
/// Ties compare `Equal` in both directions, so `sort_by` keeps their input
/// order.
pub fn sort_records<T, K: SortKey<T>>(records: &mut [&T], sort: SortConfig<K>) {
    let compare = sort.key.comparator();
    records.sort_by(|a, b| sort.direction.apply(compare(a, b)));
}

/// Slice one page out of an already filtered and sorted sequence
pub fn paginate<T: Clone>(records: &[&T], request: PageRequest) -> Page<T> {
    let pagination = PaginationMeta::new(request.page, request.page_size(), records.len());
    if pagination.page != request.page {
        tracing::debug!(
            requested = request.page,
            effective = pagination.page,
            total_pages = pagination.total_pages,
            "page out of range, clamped"
        );
    }

    let items = records[pagination.range()]
        .iter()
        .map(|record| (*record).clone())
        .collect();

    Page { items, pagination }
}

/// Filter, stable-sort and paginate `records`
///
/// The input slice is never modified; the returned page owns clones of the
/// selected records.
pub fn run<T, C, K>(records: &[T], criteria: &C, sort: SortConfig<K>, request: PageRequest) -> Page<T>
where
    T: Clone,
    C: Criteria<T> + ?Sized,
    K: SortKey<T>,
{
    let mut matched: Vec<&T> = records.iter().filter(|r| criteria.matches(r)).collect();
    sort_records(&mut matched, sort);

    tracing::debug!(
        input = records.len(),
        matched = matched.len(),
        page = request.page,
        page_size = request.page_size(),
        "query evaluated"
    );

    paginate(&matched, request)
}

/// Every page of a query, for exports and tests
pub fn run_all_pages<T, C, K>(
    records: &[T],
    criteria: &C,
    sort: SortConfig<K>,
    page_size: usize,
) -> Vec<Page<T>>
where
    T: Clone,
    C: Criteria<T> + ?Sized,
    K: SortKey<T>,
{
    let first = run(records, criteria, sort, PageRequest::first(page_size));
    let total_pages = first.total_pages();
    let mut pages = vec![first];
    pages.extend(
        (2..=total_pages).map(|page| run(records, criteria, sort, PageRequest::new(page, page_size))),
    );
    pages
}
