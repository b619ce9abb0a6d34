//! Delivery routes and the route board query

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::filter::{Choice, Criteria, TextSearch};
use crate::core::query::{self, Page, PageRequest, SortConfig, SortKey};
use crate::core::validation::validators::required;
use crate::core::{FieldChecks, Record, ValidateRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteStatus {
    Pending,
    InProgress,
    Completed,
    Delayed,
}

/// A delivery route driven on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRoute {
    pub id: String,
    pub name: String,
    pub driver: String,
    pub vehicle: String,
    pub status: RouteStatus,
    /// Clock time as shown on the board, e.g. `06:00 AM`
    pub start_time: String,
    pub estimated_duration: String,
    pub stops: u32,
    pub distance: String,
    /// Ids of the orders carried on this route
    pub orders: Vec<String>,
}

impl DeliveryRoute {
    /// Start time as a time of day, if it parses
    pub fn start_time_of_day(&self) -> Option<NaiveTime> {
        let raw = self.start_time.trim();
        NaiveTime::parse_from_str(raw, "%I:%M %p")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
            .ok()
    }
}

impl Record for DeliveryRoute {
    fn entity_type() -> &'static str {
        "delivery_route"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl ValidateRecord for DeliveryRoute {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn check_fields(&self, checks: &mut FieldChecks<'_>) {
        checks
            .check("id", self.id.as_str(), required())
            .check("driver", self.driver.as_str(), required());
    }
}

/// Route board filter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteFilter {
    pub status: Choice<RouteStatus>,
    pub search_query: String,
}

impl RouteFilter {
    pub fn compile(&self) -> RouteCriteria {
        RouteCriteria {
            status: self.status,
            search: TextSearch::new(&self.search_query),
        }
    }
}

/// Compiled [`RouteFilter`]
#[derive(Debug, Clone)]
pub struct RouteCriteria {
    status: Choice<RouteStatus>,
    search: TextSearch,
}

impl Criteria<DeliveryRoute> for RouteCriteria {
    fn matches(&self, route: &DeliveryRoute) -> bool {
        self.status.admits(&route.status)
            && self
                .search
                .hit_any([route.name.as_str(), route.driver.as_str(), route.id.as_str()])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteSortKey {
    #[default]
    StartTime,
    Stops,
}

// unparseable start times sort first
fn by_start_time(a: &DeliveryRoute, b: &DeliveryRoute) -> Ordering {
    a.start_time_of_day().cmp(&b.start_time_of_day())
}

fn by_stops(a: &DeliveryRoute, b: &DeliveryRoute) -> Ordering {
    a.stops.cmp(&b.stops)
}

impl SortKey<DeliveryRoute> for RouteSortKey {
    fn comparator(self) -> fn(&DeliveryRoute, &DeliveryRoute) -> Ordering {
        match self {
            RouteSortKey::StartTime => by_start_time,
            RouteSortKey::Stops => by_stops,
        }
    }
}

/// Filter, sort and paginate the route board
pub fn query(
    routes: &[DeliveryRoute],
    filter: &RouteFilter,
    sort: SortConfig<RouteSortKey>,
    request: PageRequest,
) -> Page<DeliveryRoute> {
    query::run(routes, &filter.compile(), sort, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: &str, start: &str, stops: u32, status: RouteStatus) -> DeliveryRoute {
        DeliveryRoute {
            id: id.to_string(),
            name: format!("{} Route", id),
            driver: "Sam".to_string(),
            vehicle: "Van".to_string(),
            status,
            start_time: start.to_string(),
            estimated_duration: "2 hours".to_string(),
            stops,
            distance: "10 miles".to_string(),
            orders: Vec::new(),
        }
    }

    #[test]
    fn test_start_time_sorts_by_clock_not_text() {
        let routes = vec![
            route("R1", "02:00 PM", 10, RouteStatus::Pending),
            route("R2", "06:00 AM", 8, RouteStatus::InProgress),
            route("R3", "08:30 AM", 12, RouteStatus::Delayed),
        ];
        let page = query(&routes, &RouteFilter::default(), SortConfig::default(), PageRequest::default());
        let ids: Vec<&str> = page.items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["R2", "R3", "R1"]);
    }

    #[test]
    fn test_status_wire_name_is_kebab_case() {
        let status: RouteStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, RouteStatus::InProgress);
    }

    #[test]
    fn test_search_matches_route_id() {
        let routes = vec![
            route("ROUTE-001", "06:00 AM", 8, RouteStatus::Completed),
            route("ROUTE-002", "07:00 AM", 6, RouteStatus::Completed),
        ];
        let filter = RouteFilter {
            search_query: "route-002".to_string(),
            ..Default::default()
        };
        let page = query(&routes, &filter, SortConfig::asc(RouteSortKey::Stops), PageRequest::default());
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "ROUTE-002");
    }
}
