//! Financial Modeling Prep data provider.
//!
//! # Example
//!
//! ```no_run
//! use fundament_data::config::Config;
//! use fundament_data::fmp::FmpClient;
//!
//! # async fn example() -> fundament_data::Result<()> {
//! let config = Config::load(None)?;
//! let client = FmpClient::new(reqwest::Client::new(), &config.api);
//! let profile = client.get_json("/profile/AAPL", &[]).await?;
//! println!("{}", profile);
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::FmpClient;
