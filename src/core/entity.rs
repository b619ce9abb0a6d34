//! Record trait implemented by every queryable entity

/// Base trait for records held in a store and queried by list views.
///
/// All records have:
/// - id: unique, stable string identifier
/// - an entity type name used in errors and log events
///
/// Uniqueness of ids is the caller's responsibility; stores and the query
/// pipeline never deduplicate.
pub trait Record: Clone + Send + Sync + 'static {
    /// Singular entity name (e.g., "order", "customer")
    fn entity_type() -> &'static str;

    /// Unique identifier of this record
    fn id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Tray {
        id: String,
    }

    impl Record for Tray {
        fn entity_type() -> &'static str {
            "tray"
        }

        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn test_record_metadata() {
        let tray = Tray {
            id: "TRAY-1".to_string(),
        };
        assert_eq!(Tray::entity_type(), "tray");
        assert_eq!(tray.id(), "TRAY-1");
    }
}
