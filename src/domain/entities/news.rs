use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::domain::services::listing::{Categorized, Dated};

/// A news article as stored in the `news` table.
///
/// Every field except the identifier is optional; rows created through the
/// back-office may leave any of them empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRecord {
    id: RecordId,
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
    image_url: Option<String>,
    date: Option<String>,
    author: Option<String>,
}

#[allow(missing_docs)]
impl NewsRecord {
    #[must_use]
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            content: None,
            category: None,
            image_url: None,
            date: None,
            author: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

impl Categorized for NewsRecord {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl Dated for NewsRecord {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}
