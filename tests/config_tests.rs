//! Integration tests for loading dashboard configuration from files

use std::io::Write;
use sunrise::prelude::*;
use tempfile::NamedTempFile;

fn yaml_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = yaml_file("page_size: 25\norders:\n  default_sort:\n    key: total\n    direction: desc\n");

    let config = DashboardConfig::from_yaml_file(file.path()).unwrap();

    assert_eq!(config.page_size, 25);
    assert_eq!(config.orders.default_sort, SortConfig::desc(OrderSortKey::Total));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");

    let err = DashboardConfig::from_yaml_file(&path).unwrap_err();

    assert_eq!(err.error_code(), "CONFIG_IO_ERROR");
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn test_layers_from_files_merge_in_order() {
    let base = yaml_file("page_size: 20\norders:\n  default_sort:\n    key: customerName\n");
    let local = yaml_file("orders:\n  default_sort:\n    key: deliveryDate\n    direction: desc\n");

    let config = DashboardConfig::load([
        ConfigLayer::from_yaml_file(base.path()).unwrap(),
        ConfigLayer::from_yaml_file(local.path()).unwrap(),
    ])
    .unwrap();

    assert_eq!(config.page_size, 20);
    assert_eq!(config.orders.default_sort, SortConfig::desc(OrderSortKey::DeliveryDate));
}

#[test]
fn test_invalid_merged_value_rejected() {
    let base = ConfigLayer::from_yaml_str("page_size: 50\n").unwrap();
    let bad = ConfigLayer::from_yaml_str("page_size: 500\n").unwrap();

    let err = DashboardConfig::load([base, bad]).unwrap_err();

    assert!(matches!(err, ConfigError::Invalid(_)));
    assert_eq!(SunriseError::from(err).error_code(), "CONFIG_INVALID");
}

#[test]
fn test_unknown_sort_key_is_parse_error() {
    let err = DashboardConfig::from_yaml_str("orders:\n  default_sort:\n    key: weight\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_config_drives_page_size() {
    let config = DashboardConfig::from_yaml_str("page_size: 4\n").unwrap();
    let orders = sample_orders(Utc::now());

    let page = query::run(
        &orders,
        &OrderFilter::default().compile(),
        config.orders.default_sort,
        config.page_request(3),
    );

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.pagination.total_pages, 3);
}
