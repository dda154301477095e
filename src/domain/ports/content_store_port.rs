//! Port definition for the content store.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{DocumentRecord, EventRecord, NewsRecord, SettingsMap};
use crate::domain::errors::StoreError;

#[cfg(test)]
use mockall::automock;

/// Read-only access to the hosted content tables.
///
/// The core never writes through this port; records are owned by the store
/// and only read as snapshots.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContentStorePort: Send + Sync {
    /// All news articles, newest first.
    async fn fetch_news(&self) -> Result<Vec<NewsRecord>, StoreError>;

    /// The `limit` newest news articles.
    async fn latest_news(&self, limit: usize) -> Result<Vec<NewsRecord>, StoreError>;

    /// All agenda entries, oldest first.
    async fn fetch_events(&self) -> Result<Vec<EventRecord>, StoreError>;

    /// The `limit` next agenda entries on or after `from`, soonest first.
    async fn upcoming_events(
        &self,
        from: NaiveDate,
        limit: usize,
    ) -> Result<Vec<EventRecord>, StoreError>;

    /// All documents, newest first.
    async fn fetch_documents(&self) -> Result<Vec<DocumentRecord>, StoreError>;

    /// Site settings folded into a map.
    async fn fetch_settings(&self) -> Result<SettingsMap, StoreError>;
}
