//! Cache inspection.

use crate::error::CliError;
use fundament_data::Context;

pub(crate) fn info(ctx: &Context) -> Result<(), CliError> {
    let cache = ctx.cache();
    let stats = cache.stats();

    println!("Cache location: {}", cache.root().display());
    println!("Entries:        {}", stats.entries);
    println!("  live:         {}", stats.live);
    println!("  expired:      {}", stats.expired);
    println!("Payload size:   {:.1} KiB", stats.payload_bytes as f64 / 1024.0);
    Ok(())
}

pub(crate) fn clear(ctx: &Context) -> Result<(), CliError> {
    let removed = ctx.cache().clear();
    println!("Removed {} cached entries from {}", removed, ctx.cache().root().display());
    Ok(())
}
