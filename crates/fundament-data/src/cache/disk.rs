//! Flat-file cache with per-key expiry.
//!
//! Layout under the cache root:
//!
//! ```text
//! <root>/metadata.json                      {"expiries": {"<key>": "YYYY-MM-DD"}}
//! <root>/income_statement/AAPL_quarter.feather
//! <root>/profile/AAPL.feather
//! ```
//!
//! Every failure in here is absorbed: reads degrade to a miss and writes are
//! skipped with a warning. The index is rewritten whole on each update and is
//! not protected against concurrent writers.

use crate::error::Result;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// Name of the index document inside the cache root.
pub const INDEX_FILE: &str = "metadata.json";

static SHARED: OnceLock<Arc<DiskCache>> = OnceLock::new();

/// Expiry index persisted next to the payload files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheIndex {
    /// Expiry date per cache key
    #[serde(default)]
    pub expiries: BTreeMap<String, NaiveDate>,
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Keys recorded in the index
    pub entries: usize,
    /// Keys that are unexpired and have a payload file
    pub live: usize,
    /// Keys whose expiry has passed
    pub expired: usize,
    /// Total size of the payload files referenced by the index
    pub payload_bytes: u64,
}

/// Disk cache mapping string keys to data frames.
#[derive(Debug)]
pub struct DiskCache {
    root: PathBuf,
}

impl DiskCache {
    /// Open a cache rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        if let Err(e) = fs::create_dir_all(&root) {
            warn!(root = %root.display(), error = %e, "failed to create cache root");
        }
        Self { root }
    }

    /// The process-wide cache.
    ///
    /// The first call fixes the root directory; later calls return the same
    /// instance and ignore their `root` argument.
    pub fn shared(root: impl Into<PathBuf>) -> Arc<Self> {
        let root = root.into();
        let cache = SHARED.get_or_init(|| Arc::new(Self::new(root.clone())));
        if cache.root != root {
            warn!(
                requested = %root.display(),
                active = %cache.root.display(),
                "shared cache already initialized, keeping the active root"
            );
        }
        Arc::clone(cache)
    }

    /// Root directory of the cache.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the payload file for a key.
    pub fn payload_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Look up an unexpired entry.
    ///
    /// Returns `None` when the key is unknown, the index is missing or
    /// corrupt, the entry has expired, or the payload cannot be read. An
    /// expired entry is evicted on the way out.
    pub fn get(&self, key: &str) -> Option<DataFrame> {
        let Some(index) = self.read_index() else {
            debug!(key, "cache index unavailable");
            return None;
        };

        let Some(expiry) = index.expiries.get(key).copied() else {
            debug!(key, "cache miss");
            return None;
        };

        if is_expired(expiry, Local::now().naive_local()) {
            debug!(key, %expiry, "cache entry expired");
            self.remove(key);
            return None;
        }

        match self.read_payload(key) {
            Ok(frame) => {
                debug!(key, rows = frame.height(), "cache hit");
                Some(frame)
            }
            Err(e) => {
                debug!(key, error = %e, "cache payload unreadable");
                None
            }
        }
    }

    /// Store `data` under `key` until `expiry`.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn set(&self, key: &str, data: &DataFrame, expiry: NaiveDate) {
        match self.try_set(key, data, expiry) {
            Ok(()) => debug!(key, %expiry, rows = data.height(), "cached"),
            Err(e) => warn!(key, error = %e, "cache write skipped"),
        }
    }

    /// Recorded expiry for a key, whether or not it has passed.
    pub fn expiry(&self, key: &str) -> Option<NaiveDate> {
        self.read_index()?.expiries.get(key).copied()
    }

    /// Drop a key and its payload. Missing entries are ignored.
    pub fn remove(&self, key: &str) {
        remove_payload(&self.payload_path(key));

        let Some(mut index) = self.read_index() else {
            return;
        };
        if index.expiries.remove(key).is_some() {
            if let Err(e) = self.write_index(&index) {
                warn!(key, error = %e, "failed to update cache index");
            }
        }
    }

    /// Remove every indexed payload and the index itself.
    ///
    /// Returns the number of keys removed.
    pub fn clear(&self) -> usize {
        let index = self.read_index().unwrap_or_default();
        for key in index.expiries.keys() {
            remove_payload(&self.payload_path(key));
        }
        remove_payload(&self.index_path());
        index.expiries.len()
    }

    /// Summarize the index.
    pub fn stats(&self) -> CacheStats {
        let index = self.read_index().unwrap_or_default();
        let now = Local::now().naive_local();

        let mut stats = CacheStats {
            entries: index.expiries.len(),
            ..CacheStats::default()
        };

        for (key, expiry) in &index.expiries {
            let size = fs::metadata(self.payload_path(key)).map(|m| m.len()).ok();
            stats.payload_bytes += size.unwrap_or(0);

            if is_expired(*expiry, now) {
                stats.expired += 1;
            } else if size.is_some() {
                stats.live += 1;
            }
        }

        stats
    }

    fn try_set(&self, key: &str, data: &DataFrame, expiry: NaiveDate) -> Result<()> {
        let path = self.payload_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(&path)?;
        IpcWriter::new(&mut file).finish(&mut data.clone())?;

        let mut index = self.read_index().unwrap_or_default();
        index.expiries.insert(key.to_string(), expiry);
        self.write_index(&index)
    }

    fn read_payload(&self, key: &str) -> Result<DataFrame> {
        let file = File::open(self.payload_path(key))?;
        Ok(IpcReader::new(file).finish()?)
    }

    fn read_index(&self) -> Option<CacheIndex> {
        let contents = fs::read_to_string(self.index_path()).ok()?;
        serde_json::from_str(&contents).ok()
    }

    fn write_index(&self, index: &CacheIndex) -> Result<()> {
        let json = serde_json::to_vec_pretty(index).map_err(std::io::Error::other)?;
        fs::write(self.index_path(), json)?;
        Ok(())
    }
}

/// An entry expires once the start of its expiry date has passed.
fn is_expired(expiry: NaiveDate, now: NaiveDateTime) -> bool {
    expiry.and_time(NaiveTime::default()) < now
}

fn remove_payload(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => debug!(path = %path.display(), error = %e, "failed to remove cache file"),
    }
}
