//! Ticker universes.

pub mod exchange;

pub use exchange::ExchangeUniverse;

/// Trait for stock universes.
pub trait Universe {
    /// Get all symbols in the universe.
    fn symbols(&self) -> Vec<String>;

    /// Check if a symbol is in the universe.
    fn contains(&self, symbol: &str) -> bool {
        self.symbols().iter().any(|s| s == symbol)
    }

    /// Get the number of constituents.
    fn size(&self) -> usize {
        self.symbols().len()
    }
}

impl Universe for ExchangeUniverse {
    fn symbols(&self) -> Vec<String> {
        self.tickers().to_vec()
    }

    fn contains(&self, symbol: &str) -> bool {
        self.tickers().iter().any(|t| t.eq_ignore_ascii_case(symbol))
    }

    fn size(&self) -> usize {
        self.tickers().len()
    }
}
