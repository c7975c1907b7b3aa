//! Declarative client configuration.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::exchange::ExchangeRef;

/// Credential mode forwarded to browser-side fetches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Credentials {
    Omit,
    SameOrigin,
    Include,
}

impl Credentials {
    /// Parse the fetch-style spelling (`omit`, `same-origin`, `include`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "omit" => Some(Self::Omit),
            "same-origin" => Some(Self::SameOrigin),
            "include" => Some(Self::Include),
            _ => None,
        }
    }
}

/// Per-request fetch configuration applied by the fetch exchange.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOptions {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
}

impl FetchOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header. Header names keep the caller's spelling.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

/// Everything needed to construct a [`Client`](crate::Client).
///
/// Equality is structural: URL, fetch options, and the ordered names of an
/// explicit exchange list. Two option values that compare equal always build
/// clients with the same configuration.
///
/// The explicit exchange list is code, not data, so it is skipped when the
/// options are serialized.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_options: Option<FetchOptions>,
    #[serde(skip)]
    pub exchanges: Option<Vec<ExchangeRef>>,
}

impl ClientOptions {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), fetch_options: None, exchanges: None }
    }

    #[must_use]
    pub fn with_fetch_options(mut self, fetch_options: FetchOptions) -> Self {
        self.fetch_options = Some(fetch_options);
        self
    }

    /// Use an explicit exchange list instead of the default pipeline.
    #[must_use]
    pub fn with_exchanges(mut self, exchanges: Vec<ExchangeRef>) -> Self {
        self.exchanges = Some(exchanges);
        self
    }

    /// Names of the explicit exchanges, in pipeline order.
    #[must_use]
    pub fn exchange_names(&self) -> Option<Vec<&'static str>> {
        self.exchanges
            .as_ref()
            .map(|list| list.iter().map(|exchange| exchange.name()).collect())
    }
}

impl PartialEq for ClientOptions {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
            && self.fetch_options == other.fetch_options
            && self.exchange_names() == other.exchange_names()
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("url", &self.url)
            .field("fetch_options", &self.fetch_options)
            .field("exchanges", &self.exchange_names())
            .finish()
    }
}
