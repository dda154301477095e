use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::domain::services::listing::{Categorized, Dated};

/// A downloadable document as stored in the `documents` table.
///
/// `file_url` points at the uploaded file itself, `thumbnail_url` at the
/// preview image derived by the upload pipeline (first PDF page for PDFs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    id: RecordId,
    title: Option<String>,
    description: Option<String>,
    file_url: Option<String>,
    thumbnail_url: Option<String>,
    date: Option<String>,
    category: Option<String>,
}

#[allow(missing_docs)]
impl DocumentRecord {
    #[must_use]
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            file_url: None,
            thumbnail_url: None,
            date: None,
            category: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_file_url(mut self, file_url: impl Into<String>) -> Self {
        self.file_url = Some(file_url.into());
        self
    }

    #[must_use]
    pub fn with_thumbnail_url(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
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
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }
}

impl Categorized for DocumentRecord {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl Dated for DocumentRecord {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}
