//! Pipeline orchestration.
//!
//! `CvParser` is the explicitly constructed pipeline context: built once at
//! startup, passed by reference into each parse call, torn down with
//! [`CvParser::shutdown`]. There is no ambient global state; concurrent
//! parses share nothing but the external cache.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::{self, CacheStore};
use crate::errors::CvError;
use crate::extract::contact::extract_contact_info;
use crate::extract::sections::split_into_sections;
use crate::layout::text::extract_document_text;
use crate::layout::{Document, Page};
use crate::models::ParsedResume;
use crate::parse::certifications::parse_certifications;
use crate::parse::education::parse_education;
use crate::parse::experience::parse_work_experience;
use crate::parse::projects::parse_projects;
use crate::parse::skills::parse_technical_skills;
use crate::parse::volunteering::parse_volunteering;

pub struct CvParser {
    cache: Option<Arc<dyn CacheStore>>,
    cache_ttl_secs: u64,
}

impl CvParser {
    /// A parser that always computes; no cache is consulted.
    pub fn new() -> Self {
        Self {
            cache: None,
            cache_ttl_secs: cache::DEFAULT_TTL_SECS,
        }
    }

    /// A parser whose runs are memoized in `cache` with the given expiry.
    pub fn with_cache(cache: Arc<dyn CacheStore>, cache_ttl_secs: u64) -> Self {
        Self {
            cache: Some(cache),
            cache_ttl_secs,
        }
    }

    /// Reads a serialized page stream from disk and runs the cached parse.
    ///
    /// Unreadable or undecodable input is the pipeline's one hard failure.
    pub async fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParsedResume, CvError> {
        let raw = tokio::fs::read(path).await?;
        let document: Document = serde_json::from_slice(&raw)?;
        Ok(self.parse_document(&raw, &document.pages).await)
    }

    /// Parses a document with cache memoization, keyed by the content hash
    /// of `raw`. Cache trouble on either path is logged and bypassed; the
    /// caller always gets a result.
    pub async fn parse_document(&self, raw: &[u8], pages: &[Page]) -> ParsedResume {
        let key = cache::content_key(raw);

        if let Some(store) = &self.cache {
            match store.get(&key).await {
                Ok(Some(bytes)) => match serde_json::from_slice::<ParsedResume>(&bytes) {
                    Ok(resume) => {
                        debug!(%key, "result cache hit");
                        return resume;
                    }
                    Err(e) => warn!(%key, "discarding undecodable cache entry: {e}"),
                },
                Ok(None) => {}
                Err(e) => warn!(%key, "cache get failed: {e}"),
            }
        }

        let resume = self.parse_pages(pages);

        if let Some(store) = &self.cache {
            match serde_json::to_vec(&resume) {
                Ok(bytes) => {
                    if let Err(e) = store.set(&key, &bytes, self.cache_ttl_secs).await {
                        warn!(%key, "cache set failed: {e}");
                    }
                }
                Err(e) => warn!(%key, "failed to serialize parse result: {e}"),
            }
        }

        resume
    }

    /// Runs the full uncached pipeline over a page sequence.
    pub fn parse_pages(&self, pages: &[Page]) -> ParsedResume {
        let text = extract_document_text(pages);
        self.parse_text(&text)
    }

    /// The rule pipeline over already-reconstructed text: contact
    /// extraction, segmentation, then one parser per present section, in a
    /// fixed stage order. A document with no extractable text yields the
    /// all-default result, which is a normal outcome, not an error.
    pub fn parse_text(&self, text: &str) -> ParsedResume {
        if text.is_empty() {
            debug!("no extractable text; returning default result");
            return ParsedResume::default();
        }

        let contact = extract_contact_info(text);
        let sections = split_into_sections(text);

        ParsedResume {
            name: contact.name,
            title: contact.title,
            location: contact.location,
            email: contact.email,
            phone: contact.phone,
            linkedin: contact.linkedin,
            github: contact.github,
            website: None,
            summary: sections.summary.as_deref().map(|s| s.trim().to_string()),
            technical_skills: sections
                .technical_skills
                .as_deref()
                .map(parse_technical_skills)
                .unwrap_or_default(),
            work_experience: sections
                .experience
                .as_deref()
                .map(parse_work_experience)
                .unwrap_or_default(),
            education: sections
                .education
                .as_deref()
                .map(parse_education)
                .unwrap_or_default(),
            projects: sections
                .projects
                .as_deref()
                .map(parse_projects)
                .unwrap_or_default(),
            certifications: sections
                .certifications
                .as_deref()
                .map(parse_certifications)
                .unwrap_or_default(),
            volunteering: sections
                .volunteering
                .as_deref()
                .map(parse_volunteering)
                .unwrap_or_default(),
        }
    }

    /// Explicit teardown hook. Backends held by the context drop here.
    pub async fn shutdown(self) {
        info!("cv parser shut down");
    }
}

impl Default for CvParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const RESUME_TEXT: &str = "\
Jane Doe
Senior Backend Engineer
Jakarta, Indonesia
jane.doe@example.com
Summary
Backend engineer with a decade of distributed systems work.
Technical Skills
Languages: Rust, Go
Databases: PostgreSQL, Redis
Experience
Backend Engineer
Acme Corp
Jakarta, Indonesia · Jan 2020 - Present
• Built the ingestion pipeline
Education
B.Sc Computer Science
State University, Jakarta 2012 - 2016
Projects
Chat Server: async message broker
Certifications
AWS Certified Jan 2022
Amazon Web Services
Volunteering
Mentor Jun 2021
taught weekend classes";

    /// Counting wrapper so tests can assert how often the pipeline reached
    /// for the backend.
    struct CountingCache {
        inner: MemoryCache,
        gets: AtomicUsize,
        sets: AtomicUsize,
    }

    impl CountingCache {
        fn new() -> Self {
            Self {
                inner: MemoryCache::new(),
                gets: AtomicUsize::new(0),
                sets: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CacheStore for CountingCache {
        async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &[u8], ttl_secs: u64) -> Result<()> {
            self.sets.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value, ttl_secs).await
        }
    }

    /// A cache that always errors, to prove backend failure is non-fatal.
    struct BrokenCache;

    #[async_trait]
    impl CacheStore for BrokenCache {
        async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            anyhow::bail!("backend unavailable")
        }

        async fn set(&self, _key: &str, _value: &[u8], _ttl_secs: u64) -> Result<()> {
            anyhow::bail!("backend unavailable")
        }
    }

    #[test]
    fn test_empty_document_yields_the_default_result() {
        let parser = CvParser::new();
        let pages = vec![Page {
            width: 600.0,
            height: 800.0,
            chars: vec![],
        }];
        assert_eq!(parser.parse_pages(&pages), ParsedResume::default());
        assert_eq!(parser.parse_pages(&[]), ParsedResume::default());
    }

    #[test]
    fn test_full_pipeline_over_reconstructed_text() {
        let resume = CvParser::new().parse_text(RESUME_TEXT);

        assert_eq!(resume.name.as_deref(), Some("Jane Doe"));
        assert_eq!(resume.title.as_deref(), Some("Senior Backend Engineer"));
        assert_eq!(resume.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(
            resume.summary.as_deref(),
            Some("Backend engineer with a decade of distributed systems work.")
        );

        assert_eq!(resume.technical_skills.len(), 2);
        assert_eq!(
            resume.technical_skills.get("Languages"),
            Some(&vec!["Rust".to_string(), "Go".to_string()])
        );

        assert_eq!(resume.work_experience.len(), 1);
        let job = &resume.work_experience[0];
        assert_eq!(job.position, "Backend Engineer");
        assert_eq!(job.company, "Acme Corp");
        assert_eq!(job.location, "Jakarta, Indonesia");
        assert_eq!(job.responsibilities, ["Built the ingestion pipeline"]);

        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.education[0].degree, "B.Sc Computer Science");
        assert_eq!(resume.education[0].institution, "State University");

        assert_eq!(resume.projects.len(), 1);
        assert_eq!(resume.projects[0].name, "Chat Server");

        assert_eq!(resume.certifications.len(), 1);
        assert_eq!(resume.certifications[0].issuer, "Amazon Web Services");

        assert_eq!(resume.volunteering, ["Mentor Jun 2021 taught weekend classes"]);
    }

    #[test]
    fn test_serde_round_trip_preserves_every_field() {
        let resume = CvParser::new().parse_text(RESUME_TEXT);
        let bytes = serde_json::to_vec(&resume).unwrap();
        let restored: ParsedResume = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(restored, resume);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_extraction() {
        let store = Arc::new(CountingCache::new());
        let parser = CvParser::with_cache(store.clone(), 60);

        let raw = b"document bytes";
        let pages = vec![Page {
            width: 600.0,
            height: 800.0,
            chars: vec![],
        }];

        let first = parser.parse_document(raw, &pages).await;

        // Same bytes, but a page set that would parse differently: a hit
        // must return the stored result without re-running extraction.
        let other_pages = vec![Page {
            width: 600.0,
            height: 800.0,
            chars: vec![crate::layout::PageChar {
                text: "X".to_string(),
                x0: 10.0,
                x1: 16.0,
                top: 10.0,
            }],
        }];
        let second = parser.parse_document(raw, &other_pages).await;

        assert_eq!(first, second);
        assert_eq!(store.gets.load(Ordering::SeqCst), 2);
        assert_eq!(store.sets.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_different_documents_do_not_share_cache_entries() {
        let store = Arc::new(CountingCache::new());
        let parser = CvParser::with_cache(store.clone(), 60);

        parser.parse_document(b"doc a", &[]).await;
        parser.parse_document(b"doc b", &[]).await;
        assert_eq!(store.sets.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_broken_cache_backend_is_non_fatal() {
        let parser = CvParser::with_cache(Arc::new(BrokenCache), 60);
        let resume = parser.parse_document(b"doc", &[]).await;
        assert_eq!(resume, ParsedResume::default());
    }

    #[tokio::test]
    async fn test_parse_file_reads_a_page_dump() {
        use std::io::Write;

        let document = Document {
            pages: vec![Page {
                width: 600.0,
                height: 800.0,
                chars: vec![],
            }],
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&serde_json::to_vec(&document).unwrap()).unwrap();

        let parser = CvParser::new();
        let resume = parser.parse_file(file.path()).await.unwrap();
        assert_eq!(resume, ParsedResume::default());
    }

    #[tokio::test]
    async fn test_parse_file_missing_path_is_a_hard_failure() {
        let parser = CvParser::new();
        let err = parser.parse_file("/nonexistent/dump.json").await.unwrap_err();
        assert!(matches!(err, CvError::Io(_)));
    }

    #[tokio::test]
    async fn test_parse_file_rejects_a_malformed_dump() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let err = CvParser::new().parse_file(file.path()).await.unwrap_err();
        assert!(matches!(err, CvError::PageStream(_)));
    }
}
