//! In-memory implementation of RecordSource for testing and development

use crate::core::record::Record;
use crate::source::RecordSource;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory record source
///
/// Stands in for the dashboard's mocked API. Backed by a `Vec` rather than a
/// map because list order is meaningful: the pipeline's filter stage
/// preserves relative order, so the source must too. Uses RwLock for
/// thread-safe access.
#[derive(Clone)]
pub struct InMemoryRecordSource<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> InMemoryRecordSource<T> {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a source seeded with records
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl<T: Record> Default for InMemoryRecordSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordSource<T> for InMemoryRecordSource<T> {
    async fn create(&self, record: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if records.iter().any(|r| r.id() == record.id()) {
            return Err(anyhow!(
                "{} with id '{}' already exists",
                T::record_type(),
                record.id()
            ));
        }

        records.push(record.clone());

        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.clone())
    }

    async fn update(&self, id: &str, record: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let position = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| anyhow!("{} with id '{}' not found", T::record_type(), id))?;

        records[position] = record.clone();

        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records.retain(|r| r.id() != id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Claim, ClaimStatus};
    use chrono::DateTime;

    fn claim(id: &str, status: ClaimStatus) -> Claim {
        Claim::new(
            id,
            format!("NG-{id}"),
            "Cascade Timber".to_string(),
            status,
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            "short bundle".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let source = InMemoryRecordSource::new();
        source.create(claim("CLM-1", ClaimStatus::New)).await.unwrap();

        let retrieved = source.get("CLM-1").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().status, ClaimStatus::New);

        let missing = source.get("CLM-404").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let source = InMemoryRecordSource::new();
        source.create(claim("CLM-1", ClaimStatus::New)).await.unwrap();

        let result = source.create(claim("CLM-1", ClaimStatus::Closed)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let source = InMemoryRecordSource::new();
        for id in ["CLM-3", "CLM-1", "CLM-2"] {
            source.create(claim(id, ClaimStatus::New)).await.unwrap();
        }

        let ids: Vec<String> = source
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["CLM-3", "CLM-1", "CLM-2"]);
    }

    #[tokio::test]
    async fn test_update() {
        let source = InMemoryRecordSource::new();
        source.create(claim("CLM-1", ClaimStatus::New)).await.unwrap();

        let updated = source
            .update("CLM-1", claim("CLM-1", ClaimStatus::Resolved))
            .await
            .unwrap();
        assert_eq!(updated.status, ClaimStatus::Resolved);

        let result = source
            .update("CLM-404", claim("CLM-404", ClaimStatus::New))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete() {
        let source = InMemoryRecordSource::new();
        source.create(claim("CLM-1", ClaimStatus::New)).await.unwrap();
        source.delete("CLM-1").await.unwrap();

        assert!(source.get("CLM-1").await.unwrap().is_none());
        assert!(source.list().await.unwrap().is_empty());
    }
}
