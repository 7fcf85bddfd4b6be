use thiserror::Error;

/// Top-level error type for the parsing pipeline.
///
/// An unreadable source document is the only hard failure the pipeline
/// surfaces. Everything else (unparseable pages, missing sections, cache
/// backend trouble) degrades to empty fields or a bypassed cache.
#[derive(Debug, Error)]
pub enum CvError {
    #[error("failed to read source document: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed page stream: {0}")]
    PageStream(#[from] serde_json::Error),
}
