//! Shared patterns used across the extraction heuristics.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A date range: "Month YYYY <dash> Month YYYY", "YYYY <dash> YYYY", or
    /// "YYYY <dash> Present/Current". Capture 1 is the start, capture 2 the
    /// end. A bare year does not match.
    pub static ref DATE_RANGE: Regex = Regex::new(
        r"(?i)((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}|\d{4})\s*[–—-]\s*((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}|\d{4}|Present|Current)"
    )
    .unwrap();

    pub static ref EMAIL: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();

    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+?\d{1,3}[-.\s]?)?(?:\(?\d{2,4}\)?[-.\s]?)?\d{3,4}[-.\s]?\d{3,4}"
    )
    .unwrap();

    pub static ref LINKEDIN: Regex =
        Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[A-Za-z0-9_-]+/?").unwrap();

    pub static ref GITHUB: Regex =
        Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9_-]+/?").unwrap();

    /// A short-month-plus-year token, e.g. "Jan 2022". Case-sensitive on
    /// purpose: it anchors certification and volunteering entries, where a
    /// lowercase "jan 2022" is vanishingly rare.
    pub static ref MONTH_YEAR: Regex = Regex::new(r"[A-Z][a-z]{2}\s+\d{4}").unwrap();

    /// Any bare 4-digit number.
    pub static ref YEAR: Regex = Regex::new(r"\d{4}").unwrap();

    /// A personal-name line: starts uppercase, letters and spaces only.
    pub static ref NAME_LINE: Regex = Regex::new(r"^[A-Z][a-zA-Z\s]+$").unwrap();

    /// Country/region allow-list for the location line.
    pub static ref LOCATION_LINE: Regex =
        Regex::new(r"(?i)\b(?:Indonesia|Malaysia|Singapore|India|USA|UK)\b").unwrap();
}

/// Removes every date-range occurrence from a line and trims the remainder.
pub fn strip_date_range(line: &str) -> String {
    DATE_RANGE.replace_all(line, "").trim().to_string()
}
