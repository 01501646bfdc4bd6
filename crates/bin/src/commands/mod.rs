//! Subcommand implementations.

pub(crate) mod cache;
pub(crate) mod data;
pub(crate) mod screen;
