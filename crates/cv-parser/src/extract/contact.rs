//! Contact extraction from the document header region.

use crate::extract::patterns::{EMAIL, GITHUB, LINKEDIN, LOCATION_LINE, NAME_LINE, PHONE};

/// How deep into the document the name/title heuristics look.
const HEADER_LINES: usize = 15;

/// Candidate name lines longer than this are headlines, not names.
const MAX_NAME_CHARS: usize = 50;

/// A phone candidate must keep at least this many digits once separators
/// are stripped; shorter matches are years and dates.
const MIN_PHONE_DIGITS: usize = 8;

const TITLE_KEYWORDS: &[&str] = &["developer", "engineer", "manager"];

/// Contact fields pulled from the header region. Every field is optional;
/// absence is a normal outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

/// Extracts contact info from the reconstructed document text.
///
/// Name and title only consider the first 15 lines; the pattern-based
/// fields search the whole text and keep the first valid match.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    let header: Vec<&str> = text.lines().take(HEADER_LINES).collect();
    let mut contact = ContactInfo::default();

    // Name: first short header line that looks like a personal name and
    // carries no contact markers.
    for line in &header {
        let line = line.trim();
        if !line.is_empty()
            && line.chars().count() < MAX_NAME_CHARS
            && !line.contains('@')
            && !line.contains("http")
            && !line.contains('+')
            && NAME_LINE.is_match(line)
        {
            contact.name = Some(line.to_string());
            break;
        }
    }

    // Title: first of lines 2-5 naming a recognizable role.
    for line in header.iter().skip(1).take(4) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();
        if TITLE_KEYWORDS.iter().any(|k| lower.contains(k)) {
            contact.title = Some(line.to_string());
            break;
        }
    }

    // Location: first line anywhere matching the country allow-list.
    for line in text.lines() {
        if LOCATION_LINE.is_match(line) {
            contact.location = Some(line.trim().to_string());
            break;
        }
    }

    contact.email = EMAIL.find(text).map(|m| m.as_str().to_string());

    // Phone: the pattern also matches date-like digit runs, so candidates
    // are filtered by surviving digit count.
    for m in PHONE.find_iter(text) {
        let digits = m.as_str().chars().filter(|c| c.is_ascii_digit()).count();
        if digits >= MIN_PHONE_DIGITS {
            contact.phone = Some(m.as_str().to_string());
            break;
        }
    }

    contact.linkedin = LINKEDIN.find(text).map(|m| m.as_str().to_string());
    contact.github = GITHUB.find(text).map(|m| m.as_str().to_string());

    contact
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\
Jane Doe
Senior Backend Engineer
Jakarta, Indonesia
jane.doe@example.com | +62 812 3456 7890
linkedin.com/in/janedoe | github.com/janedoe";

    #[test]
    fn test_full_header_extraction() {
        let contact = extract_contact_info(HEADER);
        assert_eq!(contact.name.as_deref(), Some("Jane Doe"));
        assert_eq!(contact.title.as_deref(), Some("Senior Backend Engineer"));
        assert_eq!(contact.location.as_deref(), Some("Jakarta, Indonesia"));
        assert_eq!(contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(contact.linkedin.as_deref(), Some("linkedin.com/in/janedoe"));
        assert_eq!(contact.github.as_deref(), Some("github.com/janedoe"));
        assert!(contact.phone.is_some());
    }

    #[test]
    fn test_name_skips_lines_with_contact_markers() {
        let text = "jane@example.com\nJane Doe\nEngineer";
        let contact = extract_contact_info(text);
        assert_eq!(contact.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_name_requires_uppercase_start() {
        let contact = extract_contact_info("jane doe\nEngineer");
        assert_eq!(contact.name, None);
    }

    #[test]
    fn test_title_is_not_taken_from_the_first_line() {
        // The title scan starts at line 2.
        let contact = extract_contact_info("Engineer\nSomething else\n");
        assert_eq!(contact.title, None);
    }

    #[test]
    fn test_phone_rejects_short_digit_runs() {
        // "Jan 2020 - 2021" style digit runs survive the phone pattern but
        // carry fewer than 8 digits.
        let contact = extract_contact_info("Jane Doe\n2020 - 2021\n");
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn test_all_fields_absent_on_empty_text() {
        assert_eq!(extract_contact_info(""), ContactInfo::default());
    }
}
