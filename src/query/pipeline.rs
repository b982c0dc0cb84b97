//! The list-query pipeline: filter, sort, paginate, badge counts
//!
//! Every operation here is a pure function over in-memory slices. Inputs are
//! never mutated; outputs are freshly allocated. The pipeline is total: empty
//! collections, absent optional fields and neutral criteria all flow through
//! without error.

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::query::config::ListConfig;
use crate::query::criteria::{FilterCriteria, Page, SortDirection, SortSpec};
use indexmap::IndexMap;

/// One page of records plus the page count for the whole collection
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    /// The records on the requested page
    pub items: Vec<T>,

    /// Total number of pages; at least 1 even for an empty collection
    pub total_pages: usize,
}

/// Apply all criteria to a record collection, preserving relative order.
///
/// A record is included iff every per-criterion predicate holds (pure AND):
/// - empty text query passes everything; otherwise any searchable field must
///   contain the query, case-insensitively
/// - each category with a non-empty selection requires the record's field
///   value to be in the selected set; empty selections are vacuously true
/// - each toggle rule on the config is enforced unless its toggle is on
/// - a bounded date range requires the designated date field to fall inside
///   it (inclusive); records missing the field do not match
///
/// With neutral criteria the output equals the input.
pub fn filter<T: Record>(
    records: &[T],
    criteria: &FilterCriteria,
    config: &ListConfig<T>,
) -> Vec<T> {
    records
        .iter()
        .filter(|record| matches(*record, criteria, config))
        .cloned()
        .collect()
}

fn matches<T: Record>(record: &T, criteria: &FilterCriteria, config: &ListConfig<T>) -> bool {
    matches_text(record, criteria, config)
        && matches_categories(record, criteria)
        && matches_toggles(record, criteria, config)
        && matches_date(record, criteria, config)
}

fn matches_text<T: Record>(record: &T, criteria: &FilterCriteria, config: &ListConfig<T>) -> bool {
    if criteria.text_query.is_empty() {
        return true;
    }
    let needle = criteria.text_query.to_lowercase();
    config.searchable_fields.iter().any(|field| {
        record
            .field_value(field)
            .is_some_and(|value| match value.as_string() {
                Some(s) => s.to_lowercase().contains(&needle),
                None => false,
            })
    })
}

fn matches_categories<T: Record>(record: &T, criteria: &FilterCriteria) -> bool {
    criteria.categories.iter().all(|(field, selection)| {
        if selection.is_empty() {
            return true;
        }
        match record.field_value(field) {
            Some(value) => selection.iter().any(|token| value.matches_token(token)),
            None => false,
        }
    })
}

fn matches_toggles<T: Record>(
    record: &T,
    criteria: &FilterCriteria,
    config: &ListConfig<T>,
) -> bool {
    config.toggle_rules.iter().all(|rule| {
        let enabled = criteria.toggles.get(rule.name()).copied().unwrap_or(false);
        rule.allows(record, enabled)
    })
}

fn matches_date<T: Record>(record: &T, criteria: &FilterCriteria, config: &ListConfig<T>) -> bool {
    let Some(field) = config.date_field.as_deref() else {
        return true;
    };
    if criteria.date_range.is_unbounded() {
        return true;
    }
    match record.field_value(field).and_then(|v| v.as_datetime()) {
        Some(value) => criteria.date_range.contains(value),
        None => false,
    }
}

/// Stable-sort records by the requested sort key.
///
/// Descending order reverses the comparator per element rather than
/// reversing the sorted array, so ties keep their incoming relative order in
/// both directions. Records missing the key sort as [`FieldValue::Null`],
/// which orders before everything else. No secondary key is applied.
pub fn sort<T: Record>(mut records: Vec<T>, spec: &SortSpec) -> Vec<T> {
    records.sort_by(|a, b| {
        let lhs = a.field_value(&spec.key).unwrap_or(FieldValue::Null);
        let rhs = b.field_value(&spec.key).unwrap_or(FieldValue::Null);
        let ordering = lhs.compare(&rhs);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    records
}

/// Slice out one page of records.
///
/// `total_pages` is `max(1, ceil(len / page_size))`. The page index is NOT
/// clamped here: an out-of-range index yields an empty page. Callers that
/// own pagination state clamp before calling (see
/// [`ListQuery`](crate::query::state::ListQuery), which resets to the first
/// page whenever criteria change).
pub fn paginate<T: Clone>(records: &[T], page: &Page) -> Paged<T> {
    let size = page.page_size();
    let total_pages = records.len().div_ceil(size).max(1);
    let start = page.page_index.saturating_mul(size);
    let items = if start >= records.len() {
        Vec::new()
    } else {
        records[start..(start + size).min(records.len())].to_vec()
    };
    Paged { items, total_pages }
}

/// Count records by a single field's display value, in first-seen order.
///
/// Used for tab badges ("New (3)"). Records missing the field, or with a
/// null value, are not counted. The function aggregates exactly the slice it
/// is given; by convention callers pass the pre-filter record set so badges
/// stay stable while filters change.
pub fn derive_counts<T: Record>(records: &[T], field: &str) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for record in records {
        let Some(value) = record.field_value(field) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Move an item within a list (drag-and-drop manual reordering).
///
/// This is user-driven manual order, deliberately kept outside the
/// criteria-driven pipeline. An out-of-range `from` is a no-op; `to` is
/// clamped to the last index.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let to = to.min(items.len() - 1);
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}
