//! Customer orders moving through the mill

use crate::core::field::{FieldValue, ToFieldValue};
use crate::impl_record_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProduction,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProduction => "in_production",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl ToFieldValue for OrderStatus {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.as_str().to_string())
    }
}

impl_record_entity!(
    Order,
    "order",
    {
        order_number: String,
        customer: String,
        species: String,
        status: OrderStatus,
        board_count: i64,
        created_at: DateTime<Utc>,
        due_date: Option<DateTime<Utc>>,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Record;

    #[test]
    fn test_field_dispatch() {
        let order = Order::new(
            "ORD-1001",
            "NG-1001".to_string(),
            "Cascade Timber".to_string(),
            "Red Oak".to_string(),
            OrderStatus::InProduction,
            240,
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            None,
        );

        assert_eq!(Order::record_type(), "order");
        assert_eq!(order.id(), "ORD-1001");
        assert_eq!(
            order.field_value("status"),
            Some(FieldValue::String("in_production".to_string()))
        );
        assert_eq!(order.field_value("board_count"), Some(FieldValue::Integer(240)));
        assert!(order.field_value("due_date").is_some_and(|v| v.is_null()));
        assert_eq!(order.field_value("nope"), None);

        // field_names mirrors exactly what field_value resolves
        assert!(Order::field_names().contains(&"id"));
        assert!(Order::field_names().contains(&"due_date"));
        assert!(!Order::field_names().contains(&"nope"));
    }

    #[test]
    fn test_status_serde_wire_names() {
        let json = serde_json::to_string(&OrderStatus::InProduction).unwrap();
        assert_eq!(json, r#""in_production""#);
        let restored: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, OrderStatus::InProduction);
    }
}
