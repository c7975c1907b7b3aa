//! In-flight query de-duplication.
//!
//! While a query is in flight, identical queries (same [`OperationKey`]) join
//! the pending result instead of forwarding again. Mutations and
//! subscriptions always forward.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};

use crate::exchange::{Exchange, Forward};
use crate::operation::{Operation, OperationKey, OperationKind, OperationResult};

type InFlight = HashMap<OperationKey, Shared<BoxFuture<'static, OperationResult>>>;

#[derive(Default)]
pub struct DedupExchange {
    in_flight: Arc<Mutex<InFlight>>,
}

impl DedupExchange {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct queries currently in flight.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Exchange for DedupExchange {
    fn name(&self) -> &'static str {
        "dedup"
    }

    fn run(&self, operation: Operation, forward: Forward) -> BoxFuture<'static, OperationResult> {
        if operation.kind != OperationKind::Query {
            return forward.run(operation);
        }

        let key = operation.key;
        let joined = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner).get(&key).cloned();
        let pending = if let Some(existing) = joined {
            tracing::debug!(%key, "joining in-flight query");
            existing
        } else {
            // Forwarding runs later exchanges synchronously, so the lock is
            // released first. Futures are lazy: a losing `pending` never sends.
            let pending = forward.run(operation).shared();
            let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            in_flight.entry(key).or_insert(pending).clone()
        };

        let in_flight = Arc::clone(&self.in_flight);
        async move {
            let result = pending.clone().await;
            let mut in_flight = in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            // A newer query with the same key may already own the slot.
            if in_flight.get(&key).is_some_and(|current| current.ptr_eq(&pending)) {
                in_flight.remove(&key);
            }
            result
        }
        .boxed()
    }
}

#[cfg(test)]
#[path = "dedup_test.rs"]
mod tests;
