use crate::cache::QueryCache;
use crate::config::Config;
use anyhow::{Context, Result};

pub fn clear(config: &Config) -> Result<()> {
    let cache = QueryCache::open(config.cache_dir()?);
    let removed = cache.clear().context("Failed to clear query cache")?;
    println!("✓ Cleared {} cached queries", removed);
    Ok(())
}
