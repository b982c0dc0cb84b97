//! Filter criteria, sort specs and pagination parameters
//!
//! These are the user-supplied inputs of the list-query pipeline. All
//! parameters have neutral defaults: a default [`FilterCriteria`] constrains
//! nothing and the pipeline passes every record through.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Named set of predicates ANDed together by the filter stage
///
/// # Example
/// ```rust,ignore
/// let mut criteria = FilterCriteria::default();
/// criteria.text_query = "oak".to_string();
/// criteria
///     .categories
///     .entry("status".to_string())
///     .or_default()
///     .insert("pending".to_string());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Free-text query, matched case-insensitively as a substring against
    /// the screen's searchable fields. Empty means no text filter.
    pub text_query: String,

    /// Per-category value selections. A record matches a category only if
    /// its field value is in the selected set; an empty set means the
    /// category is not filtered.
    pub categories: BTreeMap<String, BTreeSet<String>>,

    /// Boolean toggle states, keyed by toggle rule name. A missing entry
    /// means the toggle is off and its rule's restriction applies.
    pub toggles: BTreeMap<String, bool>,

    /// Inclusive bounds on the screen's designated date field
    pub date_range: DateRange,
}

impl FilterCriteria {
    /// True when no criterion constrains anything (empty text, all category
    /// selections empty, no toggle enabled, unbounded date range)
    pub fn is_neutral(&self) -> bool {
        self.text_query.is_empty()
            && self.categories.values().all(BTreeSet::is_empty)
            && self.toggles.values().all(|enabled| !enabled)
            && self.date_range.is_unbounded()
    }
}

/// Inclusive date bounds; either side may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    /// True when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Inclusive containment check
    pub fn contains(&self, value: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| value >= from) && self.to.is_none_or(|to| value <= to)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Sort key and direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field name to sort by
    pub key: String,

    /// Sort direction
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

fn default_page_size() -> usize {
    20
}

/// Pagination window (0-based page index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Page number (starts at 0)
    pub page_index: usize,

    /// Number of items per page
    pub page_size: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: default_page_size(),
        }
    }
}

impl Page {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// Get the page size, ensuring a minimum of 1
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
