use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cv_parser::{Config, CvParser, RedisCache};

/// Parses a serialized page dump and prints the structured result.
///
/// Usage: `cv-parser <page-dump.json>`
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cv-parser v{}", env!("CARGO_PKG_VERSION"));

    let path = std::env::args()
        .nth(1)
        .context("usage: cv-parser <page-dump.json>")?;

    // A dead cache backend downgrades to always-compute, never to a failed
    // run.
    let parser = match RedisCache::open(&config.redis_url) {
        Ok(cache) => {
            info!("result cache enabled at {}", config.redis_url);
            CvParser::with_cache(Arc::new(cache), config.cache_ttl_secs)
        }
        Err(e) => {
            warn!("redis unavailable, caching disabled: {e}");
            CvParser::new()
        }
    };

    let resume = parser.parse_file(&path).await?;
    println!("{}", serde_json::to_string_pretty(&resume)?);

    parser.shutdown().await;
    Ok(())
}
