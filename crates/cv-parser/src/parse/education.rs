//! Education parsing.
//!
//! A record spans two lines: a degree line (recognized by carrying no
//! 4-digit number) followed by an institution/location line that usually
//! also holds the dates. Because real résumés frequently put the
//! institution first, a keyword-based disambiguation pass may swap the two
//! field values after the fact.

use crate::extract::patterns::{strip_date_range, DATE_RANGE, YEAR};
use crate::models::Education;

const INSTITUTION_KEYWORDS: &[&str] = &[
    "university",
    "universitas",
    "institute",
    "institut",
    "college",
    "school",
    "academy",
    "politeknik",
    "politech",
    "campus",
    "smk",
    "sma",
    "high school",
    "universiti",
];

const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "diploma",
    "degree",
    "phd",
    "doctor",
    "associate",
    "sarjana",
    "magister",
    "teknik",
    "computer",
    "science",
    "informatics",
    "information",
    "mca",
    "b.sc",
    "m.sc",
    "b.a",
    "m.a",
    "d4",
    "d3",
    "siswa",
    "major",
    "minor",
    "engineering",
];

pub fn parse_education(text: &str) -> Vec<Education> {
    let lines: Vec<&str> = text.lines().collect();
    let mut records = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() {
            i += 1;
            continue;
        }

        // A line holding a 4-digit number is never a degree candidate.
        if !YEAR.is_match(line) {
            let degree_line = line;
            i += 1;
            // A degree candidate on the final line yields no record.
            if i < lines.len() {
                let next_line = lines[i].trim();
                let combined = format!("{degree_line} {next_line}");

                let (start_date, end_date) = extract_dates(&combined);

                let inst_loc = strip_date_range(next_line);
                let mut parts = inst_loc.split(',').map(str::trim);
                let institution = parts.next().unwrap_or("").to_string();
                let location = parts.collect::<Vec<&str>>().join(", ");

                let (degree, institution) = disambiguate(degree_line.to_string(), institution);

                records.push(Education {
                    start_date,
                    end_date,
                    degree,
                    institution,
                    location,
                });
            }
        }
        // Advances past both consumed lines: the institution line is never
        // re-examined as a degree candidate.
        i += 1;
    }

    records
}

/// Dates for a record, from the concatenated degree + institution lines.
///
/// A full date range wins. Failing that, bare 4-digit years are collected:
/// two or more give first/last, exactly one gives start/"Present", none
/// leaves both empty.
fn extract_dates(combined: &str) -> (String, String) {
    if let Some(caps) = DATE_RANGE.captures(combined) {
        return (caps[1].to_string(), caps[2].to_string());
    }

    let years: Vec<&str> = YEAR.find_iter(combined).map(|m| m.as_str()).collect();
    match years.as_slice() {
        [] => (String::new(), String::new()),
        [only] => (only.to_string(), "Present".to_string()),
        [first, .., last] => (first.to_string(), last.to_string()),
    }
}

/// Swaps degree and institution when the keyword evidence says the two
/// lines arrived in the opposite order.
fn disambiguate(degree: String, institution: String) -> (String, String) {
    let deg_lower = degree.to_lowercase();
    let inst_lower = institution.to_lowercase();

    let inst_in_deg = INSTITUTION_KEYWORDS.iter().any(|k| deg_lower.contains(k));
    let deg_in_deg = DEGREE_KEYWORDS.iter().any(|k| deg_lower.contains(k));
    let deg_in_inst = DEGREE_KEYWORDS.iter().any(|k| inst_lower.contains(k));
    let inst_in_inst = INSTITUTION_KEYWORDS.iter().any(|k| inst_lower.contains(k));

    let swap = (inst_in_deg && deg_in_inst)
        || (inst_in_deg && !deg_in_deg)
        || (deg_in_inst && !inst_in_inst);

    if swap {
        (institution, degree)
    } else {
        (degree, institution)
    }
}
