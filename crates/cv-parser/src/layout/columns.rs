//! Column split detection.
//!
//! Two-column résumés read wrong when text is extracted in raw y-order: the
//! left and right columns interleave line by line. The detector looks for a
//! vertical whitespace gap wide enough to signal a two-column layout so the
//! extractor can read each column separately.

use crate::layout::Page;

/// Horizontal scan window, as fractions of page width. Off-center splits
/// are common, so the window is deliberately wide.
const SCAN_START_FRAC: f64 = 0.1;
const SCAN_END_FRAC: f64 = 0.9;

/// A gap must be strictly wider than this many units to count as a split.
/// Tight layouts can have column gutters as narrow as 6 points.
const MIN_GAP_WIDTH: usize = 5;

/// Returns the x-coordinate of the column split, or `None` for single-column
/// pages. Missing geometry or an empty character set degrades to `None`
/// rather than an error.
pub fn detect_column_split(page: &Page) -> Option<f64> {
    if page.chars.is_empty() {
        return None;
    }
    if !page.width.is_finite() || page.width <= 0.0 {
        return None;
    }

    // Unit-wide occupancy buckets across the page width.
    let mut occupied = vec![false; page.width as usize + 1];
    for ch in &page.chars {
        if !ch.x0.is_finite() || !ch.x1.is_finite() {
            continue;
        }
        let x0 = ch.x0.max(0.0) as usize;
        let x1 = ch.x1.max(0.0) as usize;
        for x in x0..=x1 {
            if x < occupied.len() {
                occupied[x] = true;
            }
        }
    }

    let scan_start = (page.width * SCAN_START_FRAC) as usize;
    let scan_end = ((page.width * SCAN_END_FRAC) as usize).min(occupied.len());

    // Longest contiguous run of unoccupied columns inside the scan window.
    let mut best_start = 0usize;
    let mut best_len = 0usize;
    let mut run_start = 0usize;
    let mut run_len = 0usize;

    for x in scan_start..scan_end {
        if !occupied[x] {
            if run_len == 0 {
                run_start = x;
            }
            run_len += 1;
        } else {
            if run_len > best_len {
                best_len = run_len;
                best_start = run_start;
            }
            run_len = 0;
        }
    }
    // A gap running into the end of the scan window still counts.
    if run_len > best_len {
        best_len = run_len;
        best_start = run_start;
    }

    if best_len > MIN_GAP_WIDTH {
        Some(best_start as f64 + best_len as f64 / 2.0)
    } else {
        None
    }
}
