//! Terminal HTTP exchange.
//!
//! Sends queries and mutations as `POST` requests with a JSON body to the
//! operation's URL, applying fetch-option headers. Subscriptions are
//! forwarded untouched; without a subscription exchange after this one they
//! end up unhandled.

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::error::ClientError;
use crate::exchange::{Exchange, Forward};
use crate::operation::{GraphQLResponse, Operation, OperationKind, OperationResult};

#[derive(Clone, Default)]
pub struct FetchExchange {
    http: reqwest::Client,
}

impl FetchExchange {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing HTTP client (connection pool, timeouts, proxies).
    #[must_use]
    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Exchange for FetchExchange {
    fn name(&self) -> &'static str {
        "fetch"
    }

    fn run(&self, operation: Operation, forward: Forward) -> BoxFuture<'static, OperationResult> {
        if operation.kind == OperationKind::Subscription {
            return forward.run(operation);
        }
        let http = self.http.clone();
        async move { send(&http, operation).await }.boxed()
    }
}

async fn send(http: &reqwest::Client, operation: Operation) -> OperationResult {
    let mut req = http
        .post(&operation.context.url)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/graphql-response+json, application/json");

    if let Some(fetch_options) = &operation.context.fetch_options {
        for (name, value) in &fetch_options.headers {
            req = req.header(name.as_str(), value.as_str());
        }
    }

    tracing::debug!(key = %operation.key, url = %operation.context.url, "fetching operation");
    let resp = req
        .json(&operation.request)
        .send()
        .await
        .map_err(|e| ClientError::Request(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::HttpStatus { status: status.as_u16(), body });
    }

    resp.json::<GraphQLResponse>()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))
}
