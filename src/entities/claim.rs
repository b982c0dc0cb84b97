//! Customer claims against delivered orders

use crate::core::field::{FieldValue, ToFieldValue};
use crate::impl_record_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review status of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    New,
    InReview,
    Resolved,
    Closed,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::New => "new",
            ClaimStatus::InReview => "in_review",
            ClaimStatus::Resolved => "resolved",
            ClaimStatus::Closed => "closed",
        }
    }
}

impl ToFieldValue for ClaimStatus {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.as_str().to_string())
    }
}

impl_record_entity!(
    Claim,
    "claim",
    {
        claim_number: String,
        customer: String,
        status: ClaimStatus,
        filed_at: DateTime<Utc>,
        description: String,
    }
);
