//! Shared handles passed to every data operation.

use crate::cache::DiskCache;
use crate::config::Config;
use crate::fmp::FmpClient;
use std::sync::Arc;

/// Configuration, provider client and cache used by data operations.
#[derive(Debug, Clone)]
pub struct Context {
    config: Config,
    client: FmpClient,
    cache: Arc<DiskCache>,
}

impl Context {
    /// Build a context on the process-wide shared cache rooted at the
    /// configured (or default) cache directory.
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        let cache = DiskCache::shared(config.cache.root_or_default());
        Self::with_cache(config, http, cache)
    }

    /// Build a context on an explicitly supplied cache.
    pub fn with_cache(config: Config, http: reqwest::Client, cache: Arc<DiskCache>) -> Self {
        let client = FmpClient::new(http, &config.api);
        Self {
            config,
            client,
            cache,
        }
    }

    /// Loaded configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Provider client.
    pub const fn client(&self) -> &FmpClient {
        &self.client
    }

    /// Disk cache.
    pub fn cache(&self) -> &DiskCache {
        &self.cache
    }
}
