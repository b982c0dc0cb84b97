//! Individual boards scanned and graded on the line

use crate::core::field::{FieldValue, ToFieldValue};
use crate::impl_record_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inspection status of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardStatus {
    Pending,
    Graded,
    Rejected,
}

impl BoardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardStatus::Pending => "pending",
            BoardStatus::Graded => "graded",
            BoardStatus::Rejected => "rejected",
        }
    }
}

impl ToFieldValue for BoardStatus {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.as_str().to_string())
    }
}

impl_record_entity!(
    Board,
    "board",
    {
        batch_id: String,
        species: String,
        // NHLA grade assigned by the rules engine (e.g. "FAS", "1 Common")
        grade: String,
        status: BoardStatus,
        defect_count: i64,
        surface_measure: f64,
        scanned_at: DateTime<Utc>,
    }
);
