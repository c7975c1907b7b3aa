//! Where client options come from.

use std::fmt;
use std::sync::Arc;

use gqlclient::{ClientOptions, ExchangeRef};

use crate::context::RequestContext;
use crate::error::{BoxError, Error};

type DeriveFn = dyn Fn(&RequestContext) -> Result<ClientOptions, BoxError> + Send + Sync;

/// Literal options, or a function of the request context.
#[derive(Clone)]
pub enum OptionsSource {
    Literal(ClientOptions),
    Derived(Arc<DeriveFn>),
}

impl OptionsSource {
    /// Options computed from the request context on every resolution.
    pub fn derived<F>(derive: F) -> Self
    where
        F: Fn(&RequestContext) -> Result<ClientOptions, BoxError> + Send + Sync + 'static,
    {
        Self::Derived(Arc::new(derive))
    }

    /// Resolve against `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResolveOptions`] when a derived function fails.
    pub fn resolve(&self, ctx: &RequestContext) -> Result<ClientOptions, Error> {
        match self {
            Self::Literal(options) => Ok(options.clone()),
            Self::Derived(derive) => derive(ctx).map_err(Error::ResolveOptions),
        }
    }

    /// Explicit exchanges known without resolving: only literal options
    /// carry them. A derived source yields `None`.
    #[must_use]
    pub fn explicit_exchanges(&self) -> Option<&[ExchangeRef]> {
        match self {
            Self::Literal(options) => options.exchanges.as_deref(),
            Self::Derived(_) => None,
        }
    }

    /// Put back the explicit exchanges that serialization strips from
    /// `options`. Options that already carry a list are left alone.
    #[must_use]
    pub fn restore_exchanges(&self, mut options: ClientOptions) -> ClientOptions {
        if options.exchanges.is_none() {
            options.exchanges = self.explicit_exchanges().map(<[ExchangeRef]>::to_vec);
        }
        options
    }
}

impl From<ClientOptions> for OptionsSource {
    fn from(options: ClientOptions) -> Self {
        Self::Literal(options)
    }
}

impl fmt::Debug for OptionsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(options) => f.debug_tuple("Literal").field(options).finish(),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
