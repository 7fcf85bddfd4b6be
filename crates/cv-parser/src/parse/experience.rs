//! Work experience parsing — the most intricate of the section parsers.
//!
//! A job block is anchored by its date-range line. Scanning from the
//! cursor, the parser looks ahead up to three lines for the first date
//! range; the lines strictly between the cursor and the date line form the
//! "header block" naming the position and company. Responsibilities follow
//! the date line until the lookahead spots the next job's date range.

use crate::extract::patterns::{strip_date_range, DATE_RANGE};
use crate::models::WorkExperience;

/// How far ahead of the cursor the date line may sit, and how far ahead a
/// date range signals the next job while collecting responsibilities.
const DATE_LOOKAHEAD: usize = 3;

/// Keywords marking a line as a position rather than a company.
const ROLE_KEYWORDS: &[&str] = &[
    "developer",
    "engineer",
    "manager",
    "lead",
    "head",
    "intern",
    "specialist",
    "consultant",
    "director",
    "officer",
    "analyst",
];

/// Separator characters trimmed off the location remainder of a date line.
const LOCATION_TRIM: &[char] = &[' ', ',', '·', '•', '|'];

pub fn parse_work_experience(text: &str) -> Vec<WorkExperience> {
    let lines: Vec<&str> = text.lines().collect();
    let mut experiences = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if lines[i].trim().is_empty() {
            i += 1;
            continue;
        }

        // Find the date line within the lookahead window.
        let mut found: Option<(usize, String, String)> = None;
        for offset in 0..DATE_LOOKAHEAD {
            let idx = i + offset;
            if idx >= lines.len() {
                break;
            }
            if let Some(caps) = DATE_RANGE.captures(lines[idx]) {
                found = Some((idx, caps[1].to_string(), caps[2].to_string()));
                break;
            }
        }

        // No date range within reach: this line starts no job block.
        let Some((date_idx, start_date, end_date)) = found else {
            i += 1;
            continue;
        };

        let header = &lines[i..date_idx];
        let (position, company) = classify_header(header, lines[date_idx]);

        let location = strip_date_range(lines[date_idx])
            .trim_matches(LOCATION_TRIM)
            .to_string();

        // Responsibilities run until a date range shows up in the next-job
        // lookahead window.
        let mut responsibilities = Vec::new();
        let mut j = date_idx + 1;
        while j < lines.len() {
            let line = lines[j].trim();
            if line.is_empty() {
                j += 1;
                continue;
            }

            let next_job = (0..DATE_LOOKAHEAD)
                .any(|off| j + off < lines.len() && DATE_RANGE.is_match(lines[j + off]));
            if next_job {
                break;
            }

            let clean = line
                .strip_prefix('•')
                .or_else(|| line.strip_prefix('-'))
                .unwrap_or(line)
                .trim();
            if !clean.is_empty() {
                responsibilities.push(clean.to_string());
            }
            j += 1;
        }

        experiences.push(WorkExperience {
            start_date,
            end_date,
            position,
            company,
            location,
            responsibilities,
        });

        i = j;
    }

    experiences
}

/// Splits a header line on `|` or ` at ` into (position, company).
fn split_position_company(line: &str) -> Option<(String, String)> {
    if let Some((position, company)) = line.split_once('|') {
        return Some((position.trim().to_string(), company.trim().to_string()));
    }
    if let Some((position, company)) = line.split_once(" at ") {
        return Some((position.trim().to_string(), company.trim().to_string()));
    }
    None
}

fn is_role_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    ROLE_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Resolves (position, company) from the header block.
///
/// Zero header lines: the date line itself carries the header; one line:
/// separator split, then keyword classification; two or more: classify the
/// first two by keywords, defaulting to company-then-position when both or
/// neither look like a role.
fn classify_header(header: &[&str], date_line: &str) -> (String, String) {
    match header.len() {
        0 => {
            let remainder = strip_date_range(date_line);
            match split_position_company(&remainder) {
                Some(split) => split,
                None => (String::new(), remainder),
            }
        }
        1 => {
            let l1 = header[0].trim();
            if let Some(split) = split_position_company(l1) {
                split
            } else if is_role_line(l1) {
                (l1.to_string(), String::new())
            } else {
                (String::new(), l1.to_string())
            }
        }
        _ => {
            let l1 = header[0].trim();
            let l2 = header[1].trim();
            match (is_role_line(l1), is_role_line(l2)) {
                (true, false) => (l1.to_string(), l2.to_string()),
                // Default order on a tie: company first, position second.
                _ => (l2.to_string(), l1.to_string()),
            }
        }
    }
}
