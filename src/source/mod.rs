//! Record source boundary
//!
//! The pipeline does not own record collections; it consumes whatever a
//! source hands it wholesale. Mutations (status changes, adds) happen here
//! and re-flow through the pipeline on the next render.

pub mod in_memory;

pub use in_memory::InMemoryRecordSource;

use crate::core::record::Record;
use anyhow::Result;
use async_trait::async_trait;

/// Service trait for supplying and mutating record collections
///
/// Implementations are agnostic to the record type. Today the only
/// implementation is in-memory; a real backend slots in behind the same
/// trait once one exists.
#[async_trait]
pub trait RecordSource<T: Record>: Send + Sync {
    /// Create a new record
    async fn create(&self, record: T) -> Result<T>;

    /// Get a record by id
    async fn get(&self, id: &str) -> Result<Option<T>>;

    /// List all records, in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Replace an existing record
    async fn update(&self, id: &str, record: T) -> Result<T>;

    /// Delete a record
    async fn delete(&self, id: &str) -> Result<()>;
}
