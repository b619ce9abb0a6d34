//! Order status lifecycle and record patches

use serde::{Deserialize, Serialize};

use crate::core::field::Timestamp;
use crate::orders::model::{Order, OrderStatus};

impl OrderStatus {
    /// Next forward step, `None` once delivered or cancelled
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Label of the button that moves an order to its next status
    pub fn next_action_label(self) -> Option<&'static str> {
        match self {
            OrderStatus::Pending => Some("Start Preparing"),
            OrderStatus::Preparing => Some("Mark as Ready"),
            OrderStatus::Ready => Some("Mark as Delivered"),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }
}

/// Partial update of one order
///
/// Patches are raw writes: they do not check the lifecycle. Use the
/// store's `advance_status` and `cancel` for guarded transitions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<Timestamp>,
    /// `Some(None)` clears the notes
    #[serde(with = "double_option", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl OrderPatch {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.delivery_date.is_none() && self.notes.is_none()
    }

    /// Copy of `order` with this patch applied
    pub fn apply(&self, order: &Order) -> Order {
        let mut next = order.clone();
        if let Some(status) = self.status {
            next.status = status;
        }
        if let Some(delivery_date) = &self.delivery_date {
            next.delivery_date = delivery_date.clone();
        }
        if let Some(notes) = &self.notes {
            next.notes = notes.clone();
        }
        next
    }
}

// absent key => None, explicit null => Some(None)
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Option<String>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            None => serializer.serialize_none(),
            Some(inner) => inner.serialize(serializer),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Option<String>>, D::Error> {
        Option::<String>::deserialize(deserializer).map(Some)
    }
}
