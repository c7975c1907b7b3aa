//! Client error channel.
//!
//! Every exchange reports failures through [`ClientError`]. The type is
//! `Clone` because a single in-flight result may be handed to several
//! waiting callers by the dedup exchange.

use crate::operation::{OperationKey, OperationKind};

/// Errors produced while running an operation through a client pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP status {status}")]
    HttpStatus { status: u16, body: String },

    /// The response body was not a valid GraphQL response.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The operation reached the end of the pipeline without any exchange
    /// producing a result. An empty pipeline fails every operation this way.
    #[error("no exchange handled {kind:?} operation {key}")]
    Unhandled { key: OperationKey, kind: OperationKind },
}
