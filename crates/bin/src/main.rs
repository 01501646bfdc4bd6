//! Fundament CLI binary.
//!
//! Fetches, caches and inspects fundamental data for equity tickers.

mod commands;
mod error;
mod render;
mod setup;

use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use fundament_data::DataKind;
use render::Format;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "fundament")]
#[command(about = "Fundament: cached fundamental data for equity tickers", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./config.json, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Cache directory, overriding the configuration
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Financial statement selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatementArg {
    Income,
    Balance,
    CashFlow,
}

impl From<StatementArg> for DataKind {
    fn from(arg: StatementArg) -> Self {
        match arg {
            StatementArg::Income => Self::IncomeStatement,
            StatementArg::Balance => Self::BalanceSheet,
            StatementArg::CashFlow => Self::CashFlow,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show a company profile
    Profile {
        /// Stock ticker
        ticker: String,

        /// Force refresh cached data
        #[arg(long)]
        refresh: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Show financial statements
    Statement {
        /// Stock ticker
        ticker: String,

        /// Statement kind
        #[arg(long, value_enum, default_value = "income")]
        kind: StatementArg,

        /// Reporting period (quarter or annual)
        #[arg(long, default_value = "quarter")]
        period: String,

        /// First date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Last date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Force refresh cached data
        #[arg(long)]
        refresh: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Show daily historical prices
    Prices {
        /// Stock ticker
        ticker: String,

        /// First date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Last date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Force refresh cached data
        #[arg(long)]
        refresh: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: Format,
    },

    /// List the tickers of an exchange
    Search {
        /// Exchange code (e.g. NASDAQ, NYSE)
        exchange: String,

        /// Skip the first N tickers
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Show at most N tickers
        #[arg(long)]
        limit: Option<usize>,

        /// Force refresh of the listing
        #[arg(long)]
        refresh: bool,
    },

    /// Screen an exchange by the mean of a statement column
    Screen {
        /// Exchange code (e.g. NASDAQ, NYSE)
        exchange: String,

        /// Skip the first N tickers of the exchange
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Screen at most N tickers
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Statement kind holding the column
        #[arg(long, value_enum, default_value = "income")]
        kind: StatementArg,

        /// Column whose mean is compared
        #[arg(long, default_value = "revenue")]
        column: String,

        /// Minimum (exclusive) mean
        #[arg(long, default_value = "100000")]
        threshold: f64,

        /// Reporting period (quarter or annual)
        #[arg(long, default_value = "quarter")]
        period: String,

        /// First date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Last date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Inspect or clear the cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Show cache location and statistics
    Info,
    /// Remove every cached entry
    Clear,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    setup::init_logging(cli.verbose);
    let ctx = setup::context(cli.config.as_deref(), cli.cache_dir)?;

    match cli.command {
        Commands::Profile {
            ticker,
            refresh,
            format,
        } => commands::data::profile(&ctx, &ticker, refresh, format).await,
        Commands::Statement {
            ticker,
            kind,
            period,
            from,
            to,
            refresh,
            format,
        } => {
            let range = setup::date_range(from.as_deref(), to.as_deref())?;
            commands::data::statement(&ctx, &ticker, kind.into(), &period, range, refresh, format)
                .await
        }
        Commands::Prices {
            ticker,
            from,
            to,
            refresh,
            format,
        } => {
            let range = setup::date_range(from.as_deref(), to.as_deref())?;
            commands::data::prices(&ctx, &ticker, range, refresh, format).await
        }
        Commands::Search {
            exchange,
            offset,
            limit,
            refresh,
        } => commands::screen::search(&ctx, &exchange, offset, limit, refresh).await,
        Commands::Screen {
            exchange,
            offset,
            limit,
            kind,
            column,
            threshold,
            period,
            from,
            to,
        } => {
            let range = setup::date_range(from.as_deref(), to.as_deref())?;
            let criteria = commands::screen::Criteria {
                kind: kind.into(),
                column,
                threshold,
                period: period.parse()?,
                range,
            };
            commands::screen::screen(&ctx, &exchange, offset, limit, criteria).await
        }
        Commands::Cache { action } => match action {
            CacheAction::Info => commands::cache::info(&ctx),
            CacheAction::Clear => commands::cache::clear(&ctx),
        },
    }
}
