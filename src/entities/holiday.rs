//! Mill holidays shown on the scheduling screen

use crate::impl_record_entity;
use chrono::{DateTime, Utc};

impl_record_entity!(
    Holiday,
    "holiday",
    {
        name: String,
        date: DateTime<Utc>,
        recurring: bool,
        region: Option<String>,
    }
);
