//! Layout-aware résumé parsing.
//!
//! The pipeline turns a paginated stream of positioned characters into a
//! structured [`ParsedResume`]: column-aware text reconstruction, section
//! segmentation, and per-section heuristic parsers, wrapped end-to-end by a
//! content-addressed result cache.

pub mod cache;
pub mod config;
pub mod errors;
pub mod extract;
pub mod layout;
pub mod models;
pub mod parse;
pub mod pipeline;

pub use cache::{CacheStore, MemoryCache, RedisCache};
pub use config::Config;
pub use errors::CvError;
pub use layout::{Document, Page, PageChar};
pub use models::{Certification, Education, ParsedResume, Project, WorkExperience};
pub use pipeline::CvParser;
