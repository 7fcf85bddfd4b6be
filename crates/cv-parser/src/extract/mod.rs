//! Header-region and section-level extraction over reconstructed text.

pub mod contact;
pub mod patterns;
pub mod sections;
