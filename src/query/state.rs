//! Criteria/sort/page state for a list screen
//!
//! The dashboard's list screens all hold the same trio of state: current
//! filter criteria, an optional sort, and a page index. [`ListQuery`] owns
//! that trio for one screen and re-derives the visible page from the full
//! record set on every call to [`ListQuery::apply`] — the record collection
//! itself stays caller-owned and re-flows through on the next render.

use crate::core::record::Record;
use crate::query::config::ListConfig;
use crate::query::criteria::{DateRange, FilterCriteria, Page, SortSpec};
use crate::query::pipeline;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// The derived view of a list screen: one page of records plus the counts
/// the pager needs
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    /// Records on the current page, filtered and sorted
    pub items: Vec<T>,

    /// Effective page index after clamping
    pub page_index: usize,

    /// Total number of pages, at least 1
    pub total_pages: usize,

    /// Total number of records after filtering, before pagination
    pub total: usize,
}

/// Query state for one list screen
///
/// Every criteria mutation resets the page index to 0, mirroring the screens'
/// reset-to-first-page-on-filter-change behavior. The page index is clamped
/// against the filtered total inside [`apply`](Self::apply), so a stale index
/// can never address past the last page.
#[derive(Debug, Clone)]
pub struct ListQuery<T> {
    config: ListConfig<T>,
    criteria: FilterCriteria,
    sort: Option<SortSpec>,
    page_index: usize,
}

impl<T: Record> ListQuery<T> {
    pub fn new(config: ListConfig<T>) -> Self {
        Self {
            config,
            criteria: FilterCriteria::default(),
            sort: None,
            page_index: 0,
        }
    }

    pub fn config(&self) -> &ListConfig<T> {
        &self.config
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Set the free-text query and reset to the first page
    pub fn set_text_query(&mut self, query: impl Into<String>) {
        self.criteria.text_query = query.into();
        self.page_index = 0;
    }

    /// Add or remove a single value in a category selection
    pub fn toggle_category_value(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let selection = self.criteria.categories.entry(field.into()).or_default();
        let value = value.into();
        if !selection.remove(&value) {
            selection.insert(value);
        }
        self.page_index = 0;
    }

    /// Replace a category's whole selection set
    pub fn set_category(&mut self, field: impl Into<String>, values: BTreeSet<String>) {
        self.criteria.categories.insert(field.into(), values);
        self.page_index = 0;
    }

    /// Set a toggle's state
    pub fn set_toggle(&mut self, name: impl Into<String>, enabled: bool) {
        self.criteria.toggles.insert(name.into(), enabled);
        self.page_index = 0;
    }

    /// Set the date range
    pub fn set_date_range(&mut self, range: DateRange) {
        self.criteria.date_range = range;
        self.page_index = 0;
    }

    /// Drop every criterion and return to the first page
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.page_index = 0;
    }

    /// Set or clear the sort; the current page is kept
    pub fn set_sort(&mut self, spec: Option<SortSpec>) {
        self.sort = spec;
    }

    /// Request a page. The index is clamped against the filtered total on
    /// the next [`apply`](Self::apply).
    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Derive the visible page from the full record set:
    /// filter, sort, clamp the page index, paginate.
    pub fn apply(&self, records: &[T]) -> ListView<T> {
        let filtered = pipeline::filter(records, &self.criteria, &self.config);
        let total = filtered.len();

        let sorted = match &self.sort {
            Some(spec) => pipeline::sort(filtered, spec),
            None => filtered,
        };

        let page_size = self.config.page_size.max(1);
        let total_pages = total.div_ceil(page_size).max(1);
        let page_index = self.page_index.min(total_pages - 1);
        let paged = pipeline::paginate(&sorted, &Page::new(page_index, page_size));

        tracing::debug!(
            screen = %self.config.screen,
            total,
            page_index,
            total_pages,
            "list query applied"
        );

        ListView {
            items: paged.items,
            page_index,
            total_pages,
            total,
        }
    }

    /// Badge counts for a field, in first-seen order.
    ///
    /// Counts are computed over whatever slice is passed in; the screens
    /// pass the full pre-filter record set so badges stay stable while
    /// filters change.
    pub fn counts(&self, records: &[T], field: &str) -> IndexMap<String, usize> {
        pipeline::derive_counts(records, field)
    }
}
