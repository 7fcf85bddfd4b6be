//! Certifications parsing.

use crate::extract::patterns::MONTH_YEAR;
use crate::models::Certification;

/// A certification line carries a short-month-plus-year token; the text
/// before the token is the name. The following line, if it exists and
/// carries no token of its own, is consumed as the issuer.
pub fn parse_certifications(text: &str) -> Vec<Certification> {
    let lines: Vec<&str> = text.lines().collect();
    let mut certifications = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() {
            i += 1;
            continue;
        }

        if let Some(m) = MONTH_YEAR.find(line) {
            let date = m.as_str().to_string();
            let name = line[..m.start()].trim().to_string();

            let mut issuer = String::new();
            if let Some(next_line) = lines.get(i + 1) {
                let next_line = next_line.trim();
                if !next_line.is_empty() && !MONTH_YEAR.is_match(next_line) {
                    issuer = next_line.to_string();
                    i += 1;
                }
            }

            certifications.push(Certification { date, name, issuer });
        }

        i += 1;
    }

    certifications
}
