//! Content-addressed result cache.
//!
//! The cache memoizes whole pipeline runs, keyed by a SHA-256 digest of the
//! source document's raw bytes. Both backends honor the same best-effort
//! contract: the pipeline never fails because the cache did. There is no
//! single-flight locking; concurrent misses for the same document each
//! compute independently, and since the pipeline is deterministic the final
//! stored value is the same regardless of write order.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;
use redis::AsyncCommands;
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

/// Keys are namespaced so parse results can share a Redis database with
/// other tenants.
pub const KEY_PREFIX: &str = "cv:";

/// Cached results expire after 24 hours.
pub const DEFAULT_TTL_SECS: u64 = 86_400;

/// Content-addressed cache key for a source document.
pub fn content_key(raw: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw);
    format!("{KEY_PREFIX}{:x}", hasher.finalize())
}

/// The get/set contract the pipeline consumes. The backend's own
/// durability and replication guarantees are its own business.
///
/// Carried in the pipeline context as `Arc<dyn CacheStore>`.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    async fn set(&self, key: &str, value: &[u8], ttl_secs: u64) -> Result<()>;
}

/// Redis-backed store.
pub struct RedisCache {
    client: redis::Client,
}

impl RedisCache {
    /// Creates the client. Connections are established lazily, so a dead
    /// backend surfaces as per-call errors, which the pipeline swallows.
    pub fn open(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let value: Option<Vec<u8>> = con.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], ttl_secs: u64) -> Result<()> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let _: () = con.set_ex(key, value, ttl_secs).await?;
        Ok(())
    }
}

/// In-process store for tests and cache-less deployments. Honors TTL on
/// read; expired entries are simply treated as absent.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (Vec<u8>, Instant)>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.lock().await;
        Ok(entries
            .get(key)
            .filter(|(_, expires_at)| *expires_at > Instant::now())
            .map(|(value, _)| value.clone()))
    }

    async fn set(&self, key: &str, value: &[u8], ttl_secs: u64) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(
            key.to_string(),
            (value.to_vec(), Instant::now() + Duration::from_secs(ttl_secs)),
        );
        Ok(())
    }
}
