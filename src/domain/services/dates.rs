//! French date rendering for listing pages.

use chrono::NaiveDate;

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Renders an ISO `YYYY-MM-DD` date as `DD/MM/YYYY`.
///
/// Unparseable input is passed through unchanged so a malformed row still
/// renders something.
#[must_use]
pub fn format_date_fr(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Renders a `YYYY-MM` month key as a French label, e.g. `mars 2024`.
///
/// Unrecognized keys are passed through unchanged.
#[must_use]
pub fn month_label(month: &str) -> String {
    let Some((year, month_number)) = month.split_once('-') else {
        return month.to_string();
    };

    match month_number.parse::<usize>() {
        Ok(n) if (1..=12).contains(&n) => format!("{} {year}", MONTHS_FR[n - 1]),
        _ => month.to_string(),
    }
}
