//! Dashboard configuration loading and merging
//!
//! Configuration comes from YAML. Each source is read as a [`ConfigLayer`]
//! where every key is optional; layers are merged onto the defaults in
//! order, later values winning, and the result is validated once.
//!
//! ```yaml
//! page_size: 20
//! orders:
//!   default_sort:
//!     key: total
//!     direction: desc
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::core::error::ConfigError;
use crate::core::query::{DEFAULT_PAGE_SIZE, PageRequest, SortConfig};
use crate::orders::sort::OrderSortKey;

/// Effective dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DashboardConfig {
    /// Records per page in every list view
    #[validate(range(min = 1, max = 100))]
    pub page_size: usize,

    pub orders: OrdersViewConfig,
}

/// Settings for the orders view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersViewConfig {
    pub default_sort: SortConfig<OrderSortKey>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            orders: OrdersViewConfig::default(),
        }
    }
}

impl Default for OrdersViewConfig {
    fn default() -> Self {
        Self {
            default_sort: OrderSortKey::default_config(),
        }
    }
}

/// One configuration source; absent keys leave the merged value untouched
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub page_size: Option<usize>,
    pub orders: OrdersLayer,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrdersLayer {
    pub default_sort: Option<SortConfig<OrderSortKey>>,
}

impl ConfigLayer {
    /// Parse a layer from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document is an empty layer, not a parse error
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a layer from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "config layer read");
        Self::from_yaml_str(&content)
    }
}

impl DashboardConfig {
    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::load([ConfigLayer::from_yaml_str(yaml)?])
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load([ConfigLayer::from_yaml_file(path)?])
    }

    /// Merge `layers` onto the defaults in order and validate the result
    pub fn load(layers: impl IntoIterator<Item = ConfigLayer>) -> Result<Self, ConfigError> {
        let config = layers
            .into_iter()
            .fold(Self::default(), |config, layer| config.merge(&layer));
        config.validate()?;

        tracing::debug!(
            page_size = config.page_size,
            default_sort = ?config.orders.default_sort,
            "dashboard config loaded"
        );
        Ok(config)
    }

    /// Apply one layer on top of this configuration
    pub fn merge(mut self, layer: &ConfigLayer) -> Self {
        if let Some(page_size) = layer.page_size {
            self.page_size = page_size;
        }
        if let Some(sort) = layer.orders.default_sort {
            self.orders.default_sort = sort;
        }
        self
    }

    /// Request for `page` at the configured page size
    pub fn page_request(&self, page: usize) -> PageRequest {
        PageRequest::new(page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::SortDirection;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.orders.default_sort, SortConfig::desc(OrderSortKey::CreatedAt));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = DashboardConfig::from_yaml_str("page_size: 25\n").unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.orders.default_sort, OrderSortKey::default_config());
    }

    #[test]
    fn test_sort_direction_defaults_to_asc() {
        let yaml = "orders:\n  default_sort:\n    key: customerName\n";
        let config = DashboardConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.orders.default_sort.key, OrderSortKey::CustomerName);
        assert_eq!(config.orders.default_sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_later_layer_wins() {
        let base = ConfigLayer::from_yaml_str("page_size: 20\norders:\n  default_sort:\n    key: total\n").unwrap();
        let local = ConfigLayer::from_yaml_str("page_size: 5\n").unwrap();

        let config = DashboardConfig::load([base, local]).unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.orders.default_sort.key, OrderSortKey::Total);
    }

    #[test]
    fn test_out_of_range_page_size_rejected() {
        let err = DashboardConfig::from_yaml_str("page_size: 0\n").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID");

        let err = DashboardConfig::from_yaml_str("page_size: 101\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = DashboardConfig::from_yaml_str("pagesize: 10\n").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
    }

    #[test]
    fn test_empty_document_is_defaults() {
        assert_eq!(DashboardConfig::from_yaml_str("").unwrap(), DashboardConfig::default());
    }
}
