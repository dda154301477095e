use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single key/value row from the `settings` table.
///
/// Values are nullable in the store; a null value means the setting has been
/// cleared and is skipped when folding rows into a [`SettingsMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingRow {
    key: String,
    value: Option<String>,
}

#[allow(missing_docs)]
impl SettingRow {
    #[must_use]
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Site settings keyed by name.
pub type SettingsMap = HashMap<String, String>;

/// Folds setting rows into a map, dropping rows with cleared values.
#[must_use]
pub fn settings_map(rows: Vec<SettingRow>) -> SettingsMap {
    rows.into_iter()
        .filter_map(|row| row.value.map(|value| (row.key, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_map_skips_cleared_values() {
        let rows = vec![
            SettingRow::new("alert_message", Some("Kermesse samedi".to_string())),
            SettingRow::new("alert_enabled", None),
            SettingRow::new("contact_email", Some("contact@example.org".to_string())),
        ];

        let map = settings_map(rows);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("alert_message").map(String::as_str), Some("Kermesse samedi"));
        assert!(!map.contains_key("alert_enabled"));
    }
}
