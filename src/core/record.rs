//! Record trait defining the shape every list screen works with

use crate::core::field::FieldValue;

/// Base trait for all records flowing through the list-query pipeline.
///
/// A record is an opaque object with a stable unique string id and a set of
/// named fields of primitive types used as filter and sort keys. The pipeline
/// never mutates records; every operation produces new collections.
pub trait Record: Clone + Send + Sync + 'static {
    /// The record type name (e.g., "order", "board")
    fn record_type() -> &'static str;

    /// Stable unique identifier for this record
    fn id(&self) -> &str;

    /// Get the value of a specific field by name.
    ///
    /// Returns `None` for unknown fields; filters treat an absent field as a
    /// non-match rather than an error.
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// All field names [`field_value`](Record::field_value) resolves,
    /// including `id`. Used to validate screen configurations against the
    /// record type they drive.
    fn field_names() -> &'static [&'static str];
}
