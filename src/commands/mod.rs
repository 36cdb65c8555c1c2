pub mod cache;
pub mod config;
pub mod dashboard;
pub mod duration;
pub mod equipment;
pub mod video;

use crate::cache::QueryCache;
use crate::config::Config;
use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Options shared by every data command
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptions {
    pub no_cache: bool,
}

/// Resolve a query through the on-disk cache unless caching is disabled.
pub(crate) fn run_query<T, F>(config: &Config, key: &[&str], opts: QueryOptions, fetch: F) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> crate::error::Result<T>,
{
    if opts.no_cache {
        return Ok(fetch()?);
    }

    let cache = QueryCache::open(config.cache_dir()?);
    cache
        .get_or_fetch(key, config.query.stale_time(), fetch)
        .with_context(|| format!("Query {:?} failed", key))
}
