//! Minimal GraphQL client with a composable exchange pipeline.
//!
//! A [`Client`] is built from [`ClientOptions`] (endpoint URL, fetch options,
//! and an optional explicit exchange list). Operations flow through the
//! client's exchanges in order; each exchange may answer the operation itself
//! or forward it to the rest of the pipeline. The default pipeline is
//! [`default_exchanges`]: in-flight de-duplication followed by an HTTP fetch.
//!
//! This crate owns no framework knowledge. Page integration lives in
//! `graphql-page`.

mod client;
mod error;
mod exchange;
pub mod exchanges;
mod operation;
mod options;

pub use client::{Client, ClientBuilder};
pub use error::ClientError;
pub use exchange::{Exchange, ExchangeRef, Forward, Pipeline, compose_exchanges, exchange_fn};
pub use exchanges::default_exchanges;
pub use operation::{
    GraphQLErrorEntry, GraphQLRequest, GraphQLResponse, Operation, OperationContext, OperationKey, OperationKind,
    OperationResult,
};
pub use options::{ClientOptions, Credentials, FetchOptions};
