//! # Neural Grader list-query core
//!
//! The shared core behind the Neural Grader dashboard's list screens:
//! orders, boards, claims and holidays all run the same deterministic
//! filter → sort → paginate pipeline over caller-owned record collections.
//!
//! ## Features
//!
//! - **One pipeline, N screens**: a parametrized [`ListConfig`](query::ListConfig)
//!   (searchable fields, category fields, date field, page size, toggles)
//!   replaces per-screen copies of the same filtering code
//! - **Pure and total**: no operation mutates its input, errors, or panics
//!   for empty inputs, absent fields or neutral criteria
//! - **Stable sort, correct descending**: direction is applied per
//!   comparison, never by reversing the sorted array, so ties keep their
//!   relative order in both directions
//! - **Badge counts**: insertion-ordered per-status totals for tab badges
//! - **Caller-owned state**: records live in a [`RecordSource`](source::RecordSource);
//!   mutations re-flow through the pipeline on the next render
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grader::prelude::*;
//!
//! let screens = ScreensConfig::default_config();
//! let config = screens.screen("orders").unwrap().to_list_config::<Order>()
//!     .with_toggle("show_cancelled", |order: &Order| {
//!         order.status != OrderStatus::Cancelled
//!     });
//!
//! let mut query = ListQuery::new(config);
//! query.set_text_query("oak");
//! query.toggle_category_value("status", "pending");
//!
//! let orders = fixtures::sample_orders();
//! let view = query.apply(&orders);
//! let badges = query.counts(&orders, "status");
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod fixtures;
pub mod query;
pub mod source;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ConfigError, GraderError, GraderResult},
        field::{FieldValue, ToFieldValue},
        record::Record,
    };

    // === Query pipeline ===
    pub use crate::query::{
        DateRange, FilterCriteria, ListConfig, ListQuery, ListView, Page, Paged, SortDirection,
        SortSpec, ToggleRule, derive_counts, filter, move_item, paginate, sort,
    };

    // === Macros ===
    pub use crate::impl_record_entity;

    // === Entities ===
    pub use crate::entities::{
        Board, BoardStatus, Claim, ClaimStatus, Holiday, Order, OrderStatus,
    };

    // === Sources ===
    pub use crate::source::{InMemoryRecordSource, RecordSource};

    // === Config ===
    pub use crate::config::{ScreenConfig, ScreensConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
