//! Row shapes returned by the store's REST interface.

use serde::Deserialize;

use crate::domain::entities::{DocumentRecord, EventRecord, NewsRecord, RecordId, SettingRow};

/// Row identifiers arrive as numbers or text depending on the table.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Number(i64),
    Text(String),
}

impl From<IdValue> for RecordId {
    fn from(value: IdValue) -> Self {
        match value {
            IdValue::Number(n) => Self::from(n),
            IdValue::Text(s) => Self::from(s),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewsRow {
    pub id: IdValue,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl From<NewsRow> for NewsRecord {
    fn from(row: NewsRow) -> Self {
        let mut record = Self::new(RecordId::from(row.id));
        if let Some(title) = row.title {
            record = record.with_title(title);
        }
        if let Some(content) = row.content {
            record = record.with_content(content);
        }
        if let Some(category) = row.category {
            record = record.with_category(category);
        }
        if let Some(image_url) = row.image_url {
            record = record.with_image_url(image_url);
        }
        if let Some(date) = row.date {
            record = record.with_date(date);
        }
        if let Some(author) = row.author {
            record = record.with_author(author);
        }
        record
    }
}

#[derive(Debug, Deserialize)]
pub struct EventRow {
    pub id: IdValue,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl From<EventRow> for EventRecord {
    fn from(row: EventRow) -> Self {
        let mut record = Self::new(RecordId::from(row.id));
        if let Some(title) = row.title {
            record = record.with_title(title);
        }
        if let Some(description) = row.description {
            record = record.with_description(description);
        }
        if let Some(date) = row.date {
            record = record.with_date(date);
        }
        if let Some(time) = row.time {
            record = record.with_time(time);
        }
        if let Some(location) = row.location {
            record = record.with_location(location);
        }
        if let Some(image_url) = row.image_url {
            record = record.with_image_url(image_url);
        }
        if let Some(category) = row.category {
            record = record.with_category(category);
        }
        record
    }
}

#[derive(Debug, Deserialize)]
pub struct DocumentRow {
    pub id: IdValue,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl From<DocumentRow> for DocumentRecord {
    fn from(row: DocumentRow) -> Self {
        let mut record = Self::new(RecordId::from(row.id));
        if let Some(title) = row.title {
            record = record.with_title(title);
        }
        if let Some(description) = row.description {
            record = record.with_description(description);
        }
        if let Some(file_url) = row.file_url {
            record = record.with_file_url(file_url);
        }
        if let Some(thumbnail_url) = row.thumbnail_url {
            record = record.with_thumbnail_url(thumbnail_url);
        }
        if let Some(date) = row.date {
            record = record.with_date(date);
        }
        if let Some(category) = row.category {
            record = record.with_category(category);
        }
        record
    }
}

#[derive(Debug, Deserialize)]
pub struct SettingsRowDto {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl From<SettingsRowDto> for SettingRow {
    fn from(row: SettingsRowDto) -> Self {
        Self::new(row.key, row.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_ids_both_deserialize() {
        let numeric: NewsRow = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        let text: NewsRow = serde_json::from_str(r#"{"id": "a1b2"}"#).unwrap();

        assert_eq!(RecordId::from(numeric.id).as_str(), "7");
        assert_eq!(RecordId::from(text.id).as_str(), "a1b2");
    }

    #[test]
    fn test_missing_optional_columns_default_to_none() {
        let row: EventRow =
            serde_json::from_str(r#"{"id": 1, "title": "Kermesse", "date": "2024-06-15"}"#)
                .unwrap();
        let record = EventRecord::from(row);

        assert_eq!(record.title(), Some("Kermesse"));
        assert_eq!(record.location(), None);
    }
}
