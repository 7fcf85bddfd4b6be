//! Ordered text reconstruction from positioned characters.

use std::cmp::Ordering;

use crate::layout::columns::detect_column_split;
use crate::layout::{Page, PageChar};

/// Characters whose tops differ by no more than this sit on the same line.
const LINE_TOLERANCE: f64 = 3.0;

/// A horizontal gap wider than this between adjacent characters becomes a
/// single space.
const WORD_GAP: f64 = 1.5;

/// Extracts the full document text, page by page in order.
///
/// Pages with a detected column split are read left region first, then
/// right, each followed by a line break. Pages that yield no text
/// contribute nothing; a failed page is never fatal to the document.
pub fn extract_document_text(pages: &[Page]) -> String {
    let mut text = String::new();
    for page in pages {
        match detect_column_split(page) {
            Some(split) => {
                let left = extract_region_text(page, 0.0, split);
                if !left.is_empty() {
                    text.push_str(&left);
                    text.push('\n');
                }
                let right = extract_region_text(page, split, page.width);
                if !right.is_empty() {
                    text.push_str(&right);
                    text.push('\n');
                }
            }
            None => {
                let page_text = extract_region_text(page, 0.0, page.width);
                if !page_text.is_empty() {
                    text.push_str(&page_text);
                    text.push('\n');
                }
            }
        }
    }
    text
}

/// Extracts the text of one vertical strip of a page.
///
/// A character belongs to the strip when its horizontal midpoint falls in
/// `[x_min, x_max)`. Characters are clustered into lines by `top`, ordered
/// by `x0` within a line, and joined top to bottom with newlines.
pub fn extract_region_text(page: &Page, x_min: f64, x_max: f64) -> String {
    let mut chars: Vec<&PageChar> = page
        .chars
        .iter()
        .filter(|c| {
            let mid = (c.x0 + c.x1) / 2.0;
            mid.is_finite() && mid >= x_min && mid < x_max
        })
        .collect();
    if chars.is_empty() {
        return String::new();
    }

    chars.sort_by(|a, b| {
        cmp_f64(a.top, b.top).then_with(|| cmp_f64(a.x0, b.x0))
    });

    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<&PageChar> = Vec::new();
    let mut current_top = 0.0;
    for c in chars {
        if current.is_empty() || (c.top - current_top).abs() <= LINE_TOLERANCE {
            if current.is_empty() {
                current_top = c.top;
            }
            current.push(c);
        } else {
            lines.push(render_line(&current));
            current_top = c.top;
            current = vec![c];
        }
    }
    if !current.is_empty() {
        lines.push(render_line(&current));
    }

    lines.join("\n")
}

fn render_line(chars: &[&PageChar]) -> String {
    let mut ordered = chars.to_vec();
    ordered.sort_by(|a, b| cmp_f64(a.x0, b.x0));

    let mut out = String::new();
    let mut prev_x1 = 0.0;
    for c in ordered {
        if !out.is_empty() && c.x0 - prev_x1 > WORD_GAP {
            out.push(' ');
        }
        out.push_str(&c.text);
        prev_x1 = c.x1;
    }
    out
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
