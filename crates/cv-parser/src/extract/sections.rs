//! Section segmentation by heading line.

use lazy_static::lazy_static;
use regex::Regex;

/// The recognized sections, in heading-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Summary,
    TechnicalSkills,
    Experience,
    Education,
    Projects,
    Certifications,
    Volunteering,
}

lazy_static! {
    /// Exact-line, case-insensitive heading patterns. A heading line carries
    /// nothing but the heading (trailing whitespace allowed).
    static ref HEADING_PATTERNS: Vec<(SectionKind, Regex)> = vec![
        (
            SectionKind::Summary,
            Regex::new(r"(?i)^(?:Summary|Profile|About|Objective)\s*$").unwrap(),
        ),
        (
            SectionKind::TechnicalSkills,
            Regex::new(r"(?i)^(?:Technical Skills|Skills|Competencies)\s*$").unwrap(),
        ),
        (
            SectionKind::Experience,
            Regex::new(r"(?i)^(?:Experience|Work Experience|Employment|Professional Experience)\s*$")
                .unwrap(),
        ),
        (
            SectionKind::Education,
            Regex::new(r"(?i)^(?:Education|Academic Background|Qualifications)\s*$").unwrap(),
        ),
        (
            SectionKind::Projects,
            Regex::new(r"(?i)^(?:Projects|Personal Projects|Key Projects)\s*$").unwrap(),
        ),
        (
            SectionKind::Certifications,
            Regex::new(r"(?i)^(?:Certification|Certifications|Certificates)\s*$").unwrap(),
        ),
        (
            SectionKind::Volunteering,
            Regex::new(r"(?i)^(?:Volunteering|Volunteer|Community)\s*$").unwrap(),
        ),
    ];
}

/// Raw section bodies keyed by the fixed section set. A missing section is
/// simply `None`; no section is ever fabricated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    pub summary: Option<String>,
    pub technical_skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub projects: Option<String>,
    pub certifications: Option<String>,
    pub volunteering: Option<String>,
}

impl Sections {
    fn slot(&mut self, kind: SectionKind) -> &mut Option<String> {
        match kind {
            SectionKind::Summary => &mut self.summary,
            SectionKind::TechnicalSkills => &mut self.technical_skills,
            SectionKind::Experience => &mut self.experience,
            SectionKind::Education => &mut self.education,
            SectionKind::Projects => &mut self.projects,
            SectionKind::Certifications => &mut self.certifications,
            SectionKind::Volunteering => &mut self.volunteering,
        }
    }
}

/// Walks lines top to bottom, flushing the accumulated body whenever a new
/// heading is recognized. Lines before the first heading are discarded;
/// blank lines are dropped from bodies; body lines keep their original
/// (untrimmed) form.
pub fn split_into_sections(text: &str) -> Sections {
    let mut sections = Sections::default();
    let mut current: Option<SectionKind> = None;
    let mut content: Vec<&str> = Vec::new();

    for line in text.lines() {
        let stripped = line.trim();

        let heading = HEADING_PATTERNS
            .iter()
            .find(|(_, re)| re.is_match(stripped))
            .map(|(kind, _)| *kind);

        if let Some(kind) = heading {
            if let Some(prev) = current {
                if !content.is_empty() {
                    *sections.slot(prev) = Some(content.join("\n"));
                }
            }
            current = Some(kind);
            content.clear();
        } else if current.is_some() && !stripped.is_empty() {
            content.push(line);
        }
    }

    if let Some(prev) = current {
        if !content.is_empty() {
            *sections.slot(prev) = Some(content.join("\n"));
        }
    }

    sections
}
