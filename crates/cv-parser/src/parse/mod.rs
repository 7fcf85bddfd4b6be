//! Per-section heuristic parsers.
//!
//! Each parser takes one raw section body and produces typed records.
//! None of them can fail: ambiguous input resolves via documented defaults
//! and unrecoverable fields stay empty.

pub mod certifications;
pub mod education;
pub mod experience;
pub mod projects;
pub mod skills;
pub mod volunteering;
