//! Supabase REST adapter for the content store port.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{DocumentRow, EventRow, NewsRow, SettingsRowDto};
use crate::domain::entities::{
    DocumentRecord, EventRecord, NewsRecord, SettingsMap, settings_map,
};
use crate::domain::errors::StoreError;
use crate::domain::ports::ContentStorePort;

/// Read-only client for the hosted Postgres REST interface.
pub struct SupabaseContentStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseContentStore {
    /// Creates a new store client for a project URL and anon key.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| StoreError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, StoreError> {
        let url = format!("{}/rest/v1/{table}", self.base_url);

        debug!(table, "Querying content store");

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .query(&[("select", "*")])
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, table, "Failed to reach content store");
                if e.is_timeout() {
                    StoreError::network("request timed out")
                } else if e.is_connect() {
                    StoreError::network("failed to connect to the store")
                } else {
                    StoreError::network(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| String::new());
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    StoreError::rejected("invalid or expired API key")
                }
                StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                    StoreError::network("store is temporarily unavailable")
                }
                _ => StoreError::unexpected(format!("unexpected response: {status} - {message}")),
            });
        }

        response.json::<Vec<T>>().await.map_err(|e| {
            warn!(error = %e, table, "Failed to parse store response");
            StoreError::decode(format!("failed to parse {table} rows: {e}"))
        })
    }
}

#[async_trait]
impl ContentStorePort for SupabaseContentStore {
    async fn fetch_news(&self) -> Result<Vec<NewsRecord>, StoreError> {
        let rows: Vec<NewsRow> = self
            .select("news", &[("order", "date.desc".to_string())])
            .await?;
        Ok(rows.into_iter().map(NewsRecord::from).collect())
    }

    async fn latest_news(&self, limit: usize) -> Result<Vec<NewsRecord>, StoreError> {
        let rows: Vec<NewsRow> = self
            .select(
                "news",
                &[
                    ("order", "date.desc".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(NewsRecord::from).collect())
    }

    async fn fetch_events(&self) -> Result<Vec<EventRecord>, StoreError> {
        let rows: Vec<EventRow> = self
            .select("events", &[("order", "date.asc".to_string())])
            .await?;
        Ok(rows.into_iter().map(EventRecord::from).collect())
    }

    async fn upcoming_events(
        &self,
        from: NaiveDate,
        limit: usize,
    ) -> Result<Vec<EventRecord>, StoreError> {
        let rows: Vec<EventRow> = self
            .select(
                "events",
                &[
                    ("date", format!("gte.{}", from.format("%Y-%m-%d"))),
                    ("order", "date.asc".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(EventRecord::from).collect())
    }

    async fn fetch_documents(&self) -> Result<Vec<DocumentRecord>, StoreError> {
        let rows: Vec<DocumentRow> = self
            .select("documents", &[("order", "date.desc".to_string())])
            .await?;
        Ok(rows.into_iter().map(DocumentRecord::from).collect())
    }

    async fn fetch_settings(&self) -> Result<SettingsMap, StoreError> {
        let rows: Vec<SettingsRowDto> = self.select("settings", &[]).await?;
        Ok(settings_map(rows.into_iter().map(Into::into).collect()))
    }
}
