//! Domain entity definitions.

mod document;
mod event;
mod news;
mod settings;

pub use document::DocumentRecord;
pub use event::EventRecord;
pub use news::NewsRecord;
pub use settings::{SettingRow, SettingsMap, settings_map};

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored content record.
///
/// The store hands out either numeric or text identifiers depending on the
/// table; both are carried as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}
