//! Technical skills parsing.

use indexmap::IndexMap;

const GENERAL_BUCKET: &str = "General";

/// Parses the skills body into category → ordered item list.
///
/// A line with a colon names a category and overwrites any earlier entry
/// for it; a colon-free line contributes its comma-split items to the
/// implicit "General" bucket, which is dropped again if nothing lands in it.
pub fn parse_technical_skills(text: &str) -> IndexMap<String, Vec<String>> {
    let mut skills: IndexMap<String, Vec<String>> = IndexMap::new();
    skills.insert(GENERAL_BUCKET.to_string(), Vec::new());

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((category, rest)) = line.split_once(':') {
            let items = split_items(rest);
            if !items.is_empty() {
                skills.insert(category.trim().to_string(), items);
            }
        } else if let Some(general) = skills.get_mut(GENERAL_BUCKET) {
            general.extend(split_items(line));
        }
    }

    if skills.get(GENERAL_BUCKET).is_some_and(|v| v.is_empty()) {
        skills.shift_remove(GENERAL_BUCKET);
    }

    skills
}

fn split_items(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
