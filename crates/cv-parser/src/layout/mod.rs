//! Input page model and layout-aware text reconstruction.
//!
//! The pipeline consumes a page sequence where each page exposes its
//! dimensions and a list of characters with horizontal spans, the only
//! layout metadata the heuristics need. How the pages were produced
//! (which PDF library, which renderer) is the hosting layer's concern.

pub mod columns;
pub mod text;

use serde::{Deserialize, Serialize};

/// A single positioned character on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageChar {
    /// The glyph text, usually one character.
    pub text: String,
    /// Left edge of the horizontal span.
    pub x0: f64,
    /// Right edge of the horizontal span.
    pub x1: f64,
    /// Distance from the top of the page.
    pub top: f64,
}

/// One page of the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub chars: Vec<PageChar>,
}

/// A serialized page stream, the on-disk form the harness binary reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}
