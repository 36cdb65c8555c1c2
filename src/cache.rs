use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const CACHE_FILE: &str = "cache.json";
pub const LOCK_FILE: &str = "cache.lock";

/// One cached query result
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CacheEntry {
    pub key: Vec<String>,
    pub fetched_at: DateTime<Utc>,
    pub data: serde_json::Value,
}

impl CacheEntry {
    pub fn is_fresh(&self, now: DateTime<Utc>, stale_time: Duration) -> bool {
        let Ok(stale) = chrono::Duration::from_std(stale_time) else {
            return true;
        };
        now.signed_duration_since(self.fetched_at) < stale
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CacheFile {
    pub version: String,
    #[serde(default)]
    pub entries: Vec<CacheEntry>,
}

impl Default for CacheFile {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            entries: Vec::new(),
        }
    }
}

impl CacheFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to temp then rename so readers never see a partial file
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Like [`CacheFile::load`], but an unreadable file counts as empty.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), "discarding unreadable cache file: {}", e);
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &[String]) -> Option<&CacheEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn put(&mut self, entry: CacheEntry) {
        self.entries.retain(|e| e.key != entry.key);
        self.entries.push(entry);
    }
}

/// On-disk query cache shared by every CLI invocation for the same user.
pub struct QueryCache {
    dir: PathBuf,
}

impl QueryCache {
    pub fn open<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn cache_path(&self) -> PathBuf {
        self.dir.join(CACHE_FILE)
    }

    fn lock_path(&self) -> PathBuf {
        self.dir.join(LOCK_FILE)
    }

    fn lock(&self) -> Result<File> {
        fs::create_dir_all(&self.dir)?;
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.lock_path())?;
        file.lock_exclusive()
            .map_err(|e| Error::Cache(format!("Failed to acquire lock: {}", e)))?;
        Ok(file)
    }

    /// Run `f` against the cache file under an exclusive lock, saving on success.
    fn with_lock<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut CacheFile) -> Result<R>,
    {
        let lock = self.lock()?;
        let path = self.cache_path();

        let mut cache = CacheFile::load_or_default(&path);
        let result = f(&mut cache);
        if result.is_ok() {
            cache.save(&path)?;
        }

        lock.unlock()
            .map_err(|e| Error::Cache(format!("Failed to unlock: {}", e)))?;
        result
    }

    /// Return the cached value for `key` while fresh, otherwise run `fetch` and store it.
    ///
    /// A failing `fetch` leaves the cache untouched.
    pub fn get_or_fetch<T, F>(&self, key: &[&str], stale_time: Duration, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<T>,
    {
        let key: Vec<String> = key.iter().map(|s| s.to_string()).collect();

        self.with_lock(|cache| {
            let now = Utc::now();
            if let Some(entry) = cache.get(&key) {
                if entry.is_fresh(now, stale_time) {
                    match serde_json::from_value::<T>(entry.data.clone()) {
                        Ok(value) => {
                            debug!(?key, fetched_at = %entry.fetched_at, "cache hit");
                            return Ok(value);
                        }
                        Err(e) => warn!(?key, "cached data no longer decodes, refetching: {}", e),
                    }
                } else {
                    debug!(?key, "cache entry stale");
                }
            }

            info!(?key, "fetching query");
            let value = fetch()?;
            cache.put(CacheEntry {
                key: key.clone(),
                fetched_at: now,
                data: serde_json::to_value(&value)?,
            });
            Ok(value)
        })
    }

    /// Reset the cache file; returns how many readable entries were dropped.
    ///
    /// A corrupt file is overwritten rather than parsed.
    pub fn clear(&self) -> Result<usize> {
        self.with_lock(|cache| {
            let removed = cache.entries.len();
            *cache = CacheFile::default();
            Ok(removed)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(age_secs: i64) -> CacheEntry {
        CacheEntry {
            key: vec!["k".to_string()],
            fetched_at: Utc::now() - chrono::Duration::seconds(age_secs),
            data: serde_json::json!(1),
        }
    }

    #[test]
    fn test_entry_freshness() {
        let stale_time = Duration::from_secs(300);
        assert!(entry(10).is_fresh(Utc::now(), stale_time));
        assert!(!entry(301).is_fresh(Utc::now(), stale_time));
    }

    #[test]
    fn test_zero_stale_time_is_never_fresh() {
        assert!(!entry(0).is_fresh(Utc::now() + chrono::Duration::milliseconds(1), Duration::ZERO));
    }

    #[test]
    fn test_put_replaces_same_key() {
        let mut file = CacheFile::default();
        file.put(entry(10));
        file.put(entry(20));
        assert_eq!(file.entries.len(), 1);
    }
}
