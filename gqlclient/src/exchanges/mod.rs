//! Built-in exchanges.

mod dedup;
mod fetch;

use std::sync::Arc;

pub use dedup::DedupExchange;
pub use fetch::FetchExchange;

use crate::exchange::ExchangeRef;

/// The pipeline a client uses when no explicit list is configured:
/// `dedup` followed by `fetch`.
#[must_use]
pub fn default_exchanges() -> Vec<ExchangeRef> {
    vec![Arc::new(DedupExchange::new()), Arc::new(FetchExchange::new())]
}
