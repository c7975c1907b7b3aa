//! Exchange trait and pipeline composition.
//!
//! DESIGN
//! ======
//! A pipeline is an ordered, immutable slice of exchanges. Running an
//! operation hands it to the first exchange together with a [`Forward`]
//! handle pointing at the next position. Exchanges either answer the
//! operation or call `forward.run(op)`; running past the last exchange
//! resolves to [`ClientError::Unhandled`].
//!
//! Futures are `'static` so results can be shared between callers (see the
//! dedup exchange). Exchanges clone whatever state they need into the
//! returned future.

use std::fmt;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::error::ClientError;
use crate::operation::{Operation, OperationResult};

/// One stage of a client's request pipeline.
pub trait Exchange: Send + Sync {
    /// Short stable name, used for equality of exchange lists and in logs.
    fn name(&self) -> &'static str;

    /// Handle `operation`, optionally delegating to the rest of the pipeline.
    fn run(&self, operation: Operation, forward: Forward) -> BoxFuture<'static, OperationResult>;
}

/// Shared handle to an exchange.
pub type ExchangeRef = Arc<dyn Exchange>;

/// Handle to the remainder of a pipeline, passed to each exchange.
#[derive(Clone)]
pub struct Forward {
    exchanges: Arc<[ExchangeRef]>,
    index: usize,
}

impl Forward {
    /// Run `operation` through the remaining exchanges.
    pub fn run(self, operation: Operation) -> BoxFuture<'static, OperationResult> {
        let Some(exchange) = self.exchanges.get(self.index).cloned() else {
            tracing::warn!(key = %operation.key, kind = ?operation.kind, "operation fell off the exchange pipeline");
            let err = ClientError::Unhandled { key: operation.key, kind: operation.kind };
            return futures::future::ready(Err(err)).boxed();
        };
        let next = Self { exchanges: Arc::clone(&self.exchanges), index: self.index + 1 };
        exchange.run(operation, next)
    }

    /// Number of exchanges still ahead of this handle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.exchanges.len().saturating_sub(self.index)
    }
}

/// An ordered exchange list reduced into a single handler.
#[derive(Clone)]
pub struct Pipeline {
    exchanges: Arc<[ExchangeRef]>,
}

impl Pipeline {
    /// Run `operation` from the first exchange.
    pub fn run(&self, operation: Operation) -> BoxFuture<'static, OperationResult> {
        Forward { exchanges: Arc::clone(&self.exchanges), index: 0 }.run(operation)
    }

    /// Exchange names in pipeline order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.exchanges.iter().map(|exchange| exchange.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// The exchanges this pipeline was composed from.
    #[must_use]
    pub fn exchanges(&self) -> Vec<ExchangeRef> {
        self.exchanges.to_vec()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pipeline").field(&self.names()).finish()
    }
}

/// Compose an ordered exchange list into a pipeline.
///
/// An empty list is accepted; operations on it fail with
/// [`ClientError::Unhandled`].
#[must_use]
pub fn compose_exchanges(exchanges: Vec<ExchangeRef>) -> Pipeline {
    Pipeline { exchanges: exchanges.into() }
}

struct FnExchange<F> {
    name: &'static str,
    run: F,
}

impl<F> Exchange for FnExchange<F>
where
    F: Fn(Operation, Forward) -> BoxFuture<'static, OperationResult> + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn run(&self, operation: Operation, forward: Forward) -> BoxFuture<'static, OperationResult> {
        (self.run)(operation, forward)
    }
}

/// Build an exchange from a closure.
pub fn exchange_fn<F>(name: &'static str, run: F) -> ExchangeRef
where
    F: Fn(Operation, Forward) -> BoxFuture<'static, OperationResult> + Send + Sync + 'static,
{
    Arc::new(FnExchange { name, run })
}

#[cfg(test)]
#[path = "exchange_test.rs"]
mod tests;
