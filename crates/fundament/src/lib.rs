#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundament/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod asset;
pub mod screen;
pub mod search;
pub mod universe;

// Re-export the data layer
pub use fundament_data as data;

pub use asset::Asset;
pub use screen::screen;
pub use universe::{ExchangeUniverse, Universe};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
