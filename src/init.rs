//! Client initializer.
//!
//! Turns resolved options into a client. Stateless: every call builds an
//! independent instance, so concurrent request handlers can call it freely.

use std::fmt;
use std::sync::Arc;

use gqlclient::{Client, ClientOptions, ExchangeRef, default_exchanges};

/// Rewrites the default exchange list into the final pipeline.
///
/// The function may reorder, drop, wrap, or append exchanges. An empty
/// result is accepted here and fails every operation on the resulting
/// client later, through the client's own error channel.
#[derive(Clone)]
pub struct MergeExchanges(Arc<dyn Fn(Vec<ExchangeRef>) -> Vec<ExchangeRef> + Send + Sync>);

impl MergeExchanges {
    pub fn new(merge: impl Fn(Vec<ExchangeRef>) -> Vec<ExchangeRef> + Send + Sync + 'static) -> Self {
        Self(Arc::new(merge))
    }

    #[must_use]
    pub fn apply(&self, exchanges: Vec<ExchangeRef>) -> Vec<ExchangeRef> {
        (self.0)(exchanges)
    }
}

impl fmt::Debug for MergeExchanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MergeExchanges(..)")
    }
}

/// What happens when options carry an explicit exchange list and a merge
/// function is also configured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExchangePolicy {
    /// The explicit list is used as-is; the merge function is not called.
    #[default]
    ExplicitWins,
    /// The merge function receives the explicit list instead of the defaults.
    MergeOverExplicit,
}

/// A freshly built client and the exact options it was built from.
#[derive(Clone, Debug)]
pub struct Initialized {
    pub client: Client,
    pub options: ClientOptions,
}

/// Build a client from resolved options.
///
/// Exchange selection:
/// 1. explicit list + [`ExchangePolicy::ExplicitWins`]: the list, unmodified;
/// 2. otherwise the base list (explicit under `MergeOverExplicit`, else
///    [`default_exchanges`]) passed through `merge` exactly once, if given.
#[must_use]
pub fn init_client(options: ClientOptions, merge: Option<&MergeExchanges>, policy: ExchangePolicy) -> Initialized {
    let exchanges = match (&options.exchanges, policy) {
        (Some(explicit), ExchangePolicy::ExplicitWins) => {
            if merge.is_some() {
                tracing::debug!(url = %options.url, "explicit exchanges configured; merge function skipped");
            }
            explicit.clone()
        }
        (Some(explicit), ExchangePolicy::MergeOverExplicit) => merged(explicit.clone(), merge),
        (None, _) => merged(default_exchanges(), merge),
    };

    let client = Client::from_parts(options.url.clone(), options.fetch_options.clone(), exchanges);
    Initialized { client, options }
}

fn merged(base: Vec<ExchangeRef>, merge: Option<&MergeExchanges>) -> Vec<ExchangeRef> {
    match merge {
        Some(merge) => merge.apply(base),
        None => base,
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
