//! Startup: logging, configuration and the data context.

use crate::error::CliError;
use fundament_data::range::parse_date;
use fundament_data::{Config, Context, DateRange};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows `-v`.
pub(crate) fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the configuration and build the context on the shared cache.
pub(crate) fn context(
    config_path: Option<&Path>,
    cache_dir: Option<PathBuf>,
) -> Result<Context, CliError> {
    let mut config = Config::load(config_path)?;
    if let Some(dir) = cache_dir {
        config.cache.root = Some(dir);
    }
    if config.api.fmp.key.is_empty() {
        tracing::warn!("no API key configured, set api.fmp.key or FMP_API_KEY");
    }

    Ok(Context::new(config, reqwest::Client::new()))
}

/// Inclusive range from optional `YYYY-MM-DD` bounds; a missing bound is open.
pub(crate) fn date_range(from: Option<&str>, to: Option<&str>) -> Result<DateRange, CliError> {
    let all = DateRange::all();
    let start = from.map(parse_date).transpose()?.unwrap_or(all.start);
    let end = to.map(parse_date).transpose()?.unwrap_or(all.end);
    Ok(DateRange::new(start, end))
}
