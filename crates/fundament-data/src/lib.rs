#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundament/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod config;
pub mod context;
pub mod dataset;
pub mod error;
pub mod fields;
pub mod fmp;
pub mod kind;
pub mod normalize;
pub mod range;
pub mod request;

pub use cache::DiskCache;
pub use config::Config;
pub use context::Context;
pub use dataset::{Dataset, Source};
pub use error::{DataError, Result};
pub use kind::{DataKind, Period};
pub use range::{DateRange, date_range};
pub use request::DataRequest;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
