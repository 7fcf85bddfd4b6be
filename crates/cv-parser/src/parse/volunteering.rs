//! Volunteering parsing.

use crate::extract::patterns::MONTH_YEAR;

/// A line carrying a short-month-plus-year token starts a new activity;
/// token-free lines are space-joined onto the current one. Lines before the
/// first dated activity are dropped.
pub fn parse_volunteering(text: &str) -> Vec<String> {
    let mut activities = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if MONTH_YEAR.is_match(line) {
            if let Some(finished) = current.take() {
                activities.push(finished);
            }
            current = Some(line.to_string());
        } else if let Some(activity) = current.as_mut() {
            activity.push(' ');
            activity.push_str(line);
        }
    }

    if let Some(finished) = current {
        activities.push(finished);
    }

    activities
}
