//! Pure listing helpers: category/month derivation, filtering, excerpts.
//!
//! Everything here operates on an immutable snapshot already fetched from the
//! store and preserves the snapshot's relative order.

/// Sentinel category meaning "no filter applied".
///
/// Always occupies position 0 of a derived category list.
pub const CATEGORY_ALL: &str = "All";

/// Records that may carry a free-text category label.
pub trait Categorized {
    /// The category label, if any. An empty label counts as none.
    fn category(&self) -> Option<&str>;
}

/// Records that may carry an ISO `YYYY-MM-DD` date string.
pub trait Dated {
    /// The date string, if any.
    fn date(&self) -> Option<&str>;
}

/// Collects distinct non-empty categories in first-seen order, with the
/// [`CATEGORY_ALL`] sentinel prepended.
#[must_use]
pub fn derive_categories<T: Categorized>(records: &[T]) -> Vec<String> {
    let mut categories = vec![CATEGORY_ALL.to_string()];

    for record in records {
        if let Some(category) = record.category() {
            if !category.is_empty() && !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
    }

    categories
}

/// Collects distinct `YYYY-MM` prefixes of non-empty dates, ascending.
///
/// Lexical order equals chronological order for this format. Dates too
/// short for a month key, or whose seventh byte is not a character
/// boundary, are skipped rather than failing the listing.
#[must_use]
pub fn derive_months<T: Dated>(records: &[T]) -> Vec<String> {
    let mut months: Vec<String> = Vec::new();

    for record in records {
        if let Some(month) = record.date().and_then(|date| date.get(..7)) {
            if !months.iter().any(|m| m == month) {
                months.push(month.to_string());
            }
        }
    }

    months.sort();
    months
}

fn matches_category<T: Categorized>(record: &T, selected: &str) -> bool {
    selected == CATEGORY_ALL || record.category() == Some(selected)
}

fn matches_month<T: Dated>(record: &T, selected_month: &str) -> bool {
    selected_month.is_empty()
        || record
            .date()
            .is_some_and(|date| date.starts_with(selected_month))
}

/// Keeps records whose category equals `selected`, in original order.
///
/// The [`CATEGORY_ALL`] sentinel selects everything.
pub fn filter_by_category<'a, T: Categorized>(records: &'a [T], selected: &str) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_category(*record, selected))
        .collect()
}

/// Keeps records whose date starts with `selected_month`, in original order.
///
/// An empty month selects everything; records without a date never match a
/// non-empty month.
pub fn filter_by_month<'a, T: Dated>(records: &'a [T], selected_month: &str) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_month(*record, selected_month))
        .collect()
}

/// First `limit` space-separated tokens of `text`, ellipsis appended.
///
/// The ellipsis is appended even when the text is shorter than `limit`
/// tokens; list cards have always rendered short bodies that way.
#[must_use]
pub fn excerpt(text: &str, limit: usize) -> String {
    let head: Vec<&str> = text.split(' ').take(limit).collect();
    format!("{}...", head.join(" "))
}

/// A fetched snapshot together with its derived filter choices.
#[derive(Debug, Clone)]
pub struct ListingView<T> {
    records: Vec<T>,
    categories: Vec<String>,
    months: Vec<String>,
}

impl<T: Categorized + Dated> ListingView<T> {
    /// Builds a view over a snapshot, deriving categories and months eagerly.
    #[must_use]
    pub fn new(records: Vec<T>) -> Self {
        let categories = derive_categories(&records);
        let months = derive_months(&records);
        Self {
            records,
            categories,
            months,
        }
    }

    /// All records in snapshot order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Category choices, sentinel first.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Month choices, ascending.
    #[must_use]
    pub fn months(&self) -> &[String] {
        &self.months
    }

    /// Applies the month filter then the category filter.
    ///
    /// The two predicates are independent per record, so composition order
    /// does not change the result.
    #[must_use]
    pub fn filtered(&self, category: &str, month: &str) -> Vec<&T> {
        self.records
            .iter()
            .filter(|record| matches_month(*record, month) && matches_category(*record, category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        category: Option<&'static str>,
        date: Option<&'static str>,
    }

    impl Categorized for Row {
        fn category(&self) -> Option<&str> {
            self.category
        }
    }

    impl Dated for Row {
        fn date(&self) -> Option<&str> {
            self.date
        }
    }

    fn row(category: Option<&'static str>, date: Option<&'static str>) -> Row {
        Row { category, date }
    }

    #[test]
    fn test_derive_categories_first_seen_order() {
        let rows = vec![
            row(Some("A"), None),
            row(Some("B"), None),
            row(Some("A"), None),
            row(None, None),
        ];

        assert_eq!(derive_categories(&rows), vec!["All", "A", "B"]);
    }

    #[test]
    fn test_derive_categories_skips_empty_labels() {
        let rows = vec![row(Some(""), None), row(Some("Info"), None)];

        assert_eq!(derive_categories(&rows), vec!["All", "Info"]);
    }

    #[test]
    fn test_derive_categories_empty_snapshot_keeps_sentinel() {
        let rows: Vec<Row> = Vec::new();

        assert_eq!(derive_categories(&rows), vec!["All"]);
    }

    #[test]
    fn test_derive_months_sorted_and_distinct() {
        let rows = vec![
            row(None, Some("2024-04-02")),
            row(None, Some("2024-03-01")),
            row(None, Some("2024-03-15")),
            row(None, None),
        ];

        assert_eq!(derive_months(&rows), vec!["2024-03", "2024-04"]);
    }

    #[test]
    fn test_derive_months_ignores_short_dates() {
        let rows = vec![row(None, Some("2024")), row(None, Some("2024-05-01"))];

        assert_eq!(derive_months(&rows), vec!["2024-05"]);
    }

    #[test]
    fn test_derive_months_skips_date_split_inside_multibyte_char() {
        // The seventh byte of "2024-0é3" falls inside the two-byte "é";
        // such a row is skipped instead of aborting the listing.
        let rows = vec![row(None, Some("2024-0é3")), row(None, Some("2024-05-01"))];

        assert_eq!(derive_months(&rows), vec!["2024-05"]);
    }

    #[test]
    fn test_filter_all_returns_every_record_in_order() {
        let rows = vec![row(Some("Info"), None), row(Some("Urgent"), None)];

        let filtered = filter_by_category(&rows, CATEGORY_ALL);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].category(), Some("Info"));
        assert_eq!(filtered[1].category(), Some("Urgent"));
    }

    #[test]
    fn test_filter_by_category_exact_match() {
        let rows = vec![
            row(Some("Info"), Some("2024-01-10")),
            row(Some("Urgent"), Some("2024-02-15")),
        ];

        let filtered = filter_by_category(&rows, "Urgent");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date(), Some("2024-02-15"));
    }

    #[test]
    fn test_filter_by_category_excludes_uncategorized() {
        let rows = vec![row(None, None), row(Some("Info"), None)];

        assert_eq!(filter_by_category(&rows, "Info").len(), 1);
    }

    #[test]
    fn test_filter_by_month_prefix_match() {
        let rows = vec![
            row(None, Some("2024-03-01")),
            row(None, Some("2024-04-02")),
        ];

        let filtered = filter_by_month(&rows, "2024-03");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date(), Some("2024-03-01"));
    }

    #[test]
    fn test_filter_by_month_empty_selects_all() {
        let rows = vec![row(None, Some("2024-03-01")), row(None, None)];

        assert_eq!(filter_by_month(&rows, "").len(), 2);
    }

    #[test]
    fn test_filter_by_month_undated_never_matches() {
        let rows = vec![row(None, None)];

        assert!(filter_by_month(&rows, "2024-03").is_empty());
    }

    #[test]
    fn test_excerpt_truncates_and_appends_ellipsis() {
        assert_eq!(
            excerpt("un deux trois quatre cinq six sept", 5),
            "un deux trois quatre cinq..."
        );
    }

    #[test]
    fn test_excerpt_short_text_still_gets_ellipsis() {
        assert_eq!(excerpt("bonjour", 5), "bonjour...");
    }

    #[test]
    fn test_listing_view_composes_filters() {
        let rows = vec![
            row(Some("Sortie"), Some("2024-03-01")),
            row(Some("Fête"), Some("2024-03-20")),
            row(Some("Sortie"), Some("2024-04-05")),
        ];
        let view = ListingView::new(rows);

        assert_eq!(view.categories(), ["All", "Sortie", "Fête"]);
        assert_eq!(view.months(), ["2024-03", "2024-04"]);

        let filtered = view.filtered("Sortie", "2024-03");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date(), Some("2024-03-01"));

        let unfiltered = view.filtered(CATEGORY_ALL, "");
        assert_eq!(unfiltered.len(), 3);
    }
}
