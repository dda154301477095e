use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::domain::entities::{DocumentRecord, EventRecord, NewsRecord};
use crate::domain::errors::StoreError;
use crate::domain::ports::ContentStorePort;
use crate::domain::services::listing::ListingView;

const HOME_NEWS_COUNT: usize = 2;
const HOME_EVENTS_COUNT: usize = 2;

/// The home page snapshot: a couple of recent articles and the next events.
#[derive(Debug, Clone)]
pub struct HomePage {
    latest_news: Vec<NewsRecord>,
    upcoming_events: Vec<EventRecord>,
}

#[allow(missing_docs)]
impl HomePage {
    #[must_use]
    pub fn latest_news(&self) -> &[NewsRecord] {
        &self.latest_news
    }

    #[must_use]
    pub fn upcoming_events(&self) -> &[EventRecord] {
        &self.upcoming_events
    }
}

/// Reads content snapshots through the store port and derives listing views.
pub struct ContentService {
    store: Arc<dyn ContentStorePort>,
}

impl ContentService {
    /// Creates a service over a store adapter.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStorePort>) -> Self {
        Self { store }
    }

    /// News listing, newest first, with derived category choices.
    ///
    /// # Errors
    /// Returns an error when the store read fails.
    pub async fn news_listing(&self) -> Result<ListingView<NewsRecord>, StoreError> {
        let records = self.store.fetch_news().await?;
        debug!(count = records.len(), "Loaded news snapshot");
        Ok(ListingView::new(records))
    }

    /// Agenda listing, soonest first, with derived category and month choices.
    ///
    /// # Errors
    /// Returns an error when the store read fails.
    pub async fn events_listing(&self) -> Result<ListingView<EventRecord>, StoreError> {
        let records = self.store.fetch_events().await?;
        debug!(count = records.len(), "Loaded events snapshot");
        Ok(ListingView::new(records))
    }

    /// Document listing, newest first, with derived category choices.
    ///
    /// # Errors
    /// Returns an error when the store read fails.
    pub async fn documents_listing(&self) -> Result<ListingView<DocumentRecord>, StoreError> {
        let records = self.store.fetch_documents().await?;
        debug!(count = records.len(), "Loaded documents snapshot");
        Ok(ListingView::new(records))
    }

    /// Home page snapshot: the two newest articles and the two next events
    /// on or after today.
    ///
    /// # Errors
    /// Returns an error when either store read fails.
    pub async fn home(&self) -> Result<HomePage, StoreError> {
        let today = Utc::now().date_naive();

        let (latest_news, upcoming_events) = tokio::try_join!(
            self.store.latest_news(HOME_NEWS_COUNT),
            self.store.upcoming_events(today, HOME_EVENTS_COUNT),
        )?;

        Ok(HomePage {
            latest_news,
            upcoming_events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockContentStorePort;
    use crate::domain::services::listing::CATEGORY_ALL;

    fn news(id: i64, category: &str, date: &str) -> NewsRecord {
        NewsRecord::new(id).with_category(category).with_date(date)
    }

    #[tokio::test]
    async fn test_news_listing_derives_categories() {
        let mut store = MockContentStorePort::new();
        store.expect_fetch_news().returning(|| {
            Ok(vec![
                news(1, "Info", "2024-01-10"),
                news(2, "Urgent", "2024-02-15"),
                news(3, "Info", "2024-03-01"),
            ])
        });

        let service = ContentService::new(Arc::new(store));
        let listing = service.news_listing().await.unwrap();

        assert_eq!(listing.categories(), ["All", "Info", "Urgent"]);
    }

    #[tokio::test]
    async fn test_news_listing_category_filter() {
        let mut store = MockContentStorePort::new();
        store.expect_fetch_news().returning(|| {
            Ok(vec![
                news(1, "Info", "2024-01-10"),
                news(2, "Urgent", "2024-02-15"),
            ])
        });

        let service = ContentService::new(Arc::new(store));
        let listing = service.news_listing().await.unwrap();

        let urgent = listing.filtered("Urgent", "");
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].id().as_str(), "2");

        let all = listing.filtered(CATEGORY_ALL, "");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id().as_str(), "1");
        assert_eq!(all[1].id().as_str(), "2");
    }

    #[tokio::test]
    async fn test_events_listing_month_choices() {
        let mut store = MockContentStorePort::new();
        store.expect_fetch_events().returning(|| {
            Ok(vec![
                EventRecord::new(1).with_date("2024-03-01"),
                EventRecord::new(2).with_date("2024-04-02"),
            ])
        });

        let service = ContentService::new(Arc::new(store));
        let listing = service.events_listing().await.unwrap();

        assert_eq!(listing.months(), ["2024-03", "2024-04"]);

        let march = listing.filtered(CATEGORY_ALL, "2024-03");
        assert_eq!(march.len(), 1);
        assert_eq!(march[0].id().as_str(), "1");
    }

    #[tokio::test]
    async fn test_home_combines_news_and_events() {
        let mut store = MockContentStorePort::new();
        store
            .expect_latest_news()
            .withf(|limit| *limit == 2)
            .returning(|_| Ok(vec![news(1, "Info", "2024-01-10")]));
        store
            .expect_upcoming_events()
            .withf(|_, limit| *limit == 2)
            .returning(|_, _| Ok(vec![EventRecord::new(9).with_date("2099-06-15")]));

        let service = ContentService::new(Arc::new(store));
        let home = service.home().await.unwrap();

        assert_eq!(home.latest_news().len(), 1);
        assert_eq!(home.upcoming_events()[0].id().as_str(), "9");
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut store = MockContentStorePort::new();
        store
            .expect_fetch_documents()
            .returning(|| Err(StoreError::network("connection refused")));

        let service = ContentService::new(Arc::new(store));
        let result = service.documents_listing().await;

        assert!(matches!(result, Err(StoreError::Network { .. })));
    }
}
