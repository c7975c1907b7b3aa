//! The GraphQL client handle.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::exchange::{ExchangeRef, Pipeline, compose_exchanges};
use crate::exchanges::default_exchanges;
use crate::operation::{GraphQLRequest, Operation, OperationContext, OperationKind, OperationResult};
use crate::options::{ClientOptions, Credentials, FetchOptions};

/// Builder for a [`Client`].
pub struct ClientBuilder {
    url: String,
    fetch_options: FetchOptions,
    exchanges: Option<Vec<ExchangeRef>>,
}

impl ClientBuilder {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), fetch_options: FetchOptions::default(), exchanges: None }
    }

    /// Add a header sent with every fetch.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fetch_options.headers.insert(name.into(), value.into());
        self
    }

    /// Set `Authorization: Bearer <token>`.
    #[must_use]
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.header("Authorization", value)
    }

    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.fetch_options.credentials = Some(credentials);
        self
    }

    /// Replace the default pipeline with an explicit exchange list.
    #[must_use]
    pub fn exchanges(mut self, exchanges: Vec<ExchangeRef>) -> Self {
        self.exchanges = Some(exchanges);
        self
    }

    /// Collect the builder state into options without constructing a client.
    #[must_use]
    pub fn into_options(self) -> ClientOptions {
        let fetch_options = (self.fetch_options != FetchOptions::default()).then_some(self.fetch_options);
        ClientOptions { url: self.url, fetch_options, exchanges: self.exchanges }
    }

    #[must_use]
    pub fn build(self) -> Client {
        Client::new(self.into_options())
    }
}

struct ClientInner {
    id: Uuid,
    url: String,
    fetch_options: Option<FetchOptions>,
    pipeline: Pipeline,
}

/// A GraphQL client: endpoint configuration plus a composed exchange pipeline.
///
/// Cloning is cheap and yields the same instance (see [`Client::ptr_eq`]).
/// Every construction gets a fresh [`Client::id`], even from equal options.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Client {
    /// Construct a client from options, using the default pipeline unless
    /// the options carry an explicit exchange list.
    #[must_use]
    pub fn new(options: ClientOptions) -> Self {
        let exchanges = options.exchanges.unwrap_or_else(default_exchanges);
        Self::from_parts(options.url, options.fetch_options, exchanges)
    }

    #[must_use]
    pub fn builder(url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(url)
    }

    /// Construct a client with an already-final exchange list.
    #[must_use]
    pub fn from_parts(url: impl Into<String>, fetch_options: Option<FetchOptions>, exchanges: Vec<ExchangeRef>) -> Self {
        let pipeline = compose_exchanges(exchanges);
        let inner = ClientInner { id: Uuid::new_v4(), url: url.into(), fetch_options, pipeline };
        tracing::debug!(client_id = %inner.id, url = %inner.url, exchanges = ?inner.pipeline.names(), "graphql client created");
        Self { inner: Arc::new(inner) }
    }

    /// Process-unique identity of this instance.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    #[must_use]
    pub fn fetch_options(&self) -> Option<&FetchOptions> {
        self.inner.fetch_options.as_ref()
    }

    #[must_use]
    pub fn pipeline(&self) -> &Pipeline {
        &self.inner.pipeline
    }

    #[must_use]
    pub fn exchange_names(&self) -> Vec<&'static str> {
        self.inner.pipeline.names()
    }

    /// Options describing this client's URL and fetch configuration.
    ///
    /// The exchange list is left unset; the pipeline itself is not data.
    #[must_use]
    pub fn options(&self) -> ClientOptions {
        ClientOptions { url: self.inner.url.clone(), fetch_options: self.inner.fetch_options.clone(), exchanges: None }
    }

    /// Whether both handles refer to the same client instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Bind a request to this client's endpoint configuration.
    #[must_use]
    pub fn create_request_operation(&self, kind: OperationKind, request: GraphQLRequest) -> Operation {
        Operation {
            key: request.key(),
            kind,
            request,
            context: OperationContext { url: self.inner.url.clone(), fetch_options: self.inner.fetch_options.clone() },
        }
    }

    /// Run an operation through the pipeline.
    pub fn execute(&self, operation: Operation) -> BoxFuture<'static, OperationResult> {
        self.inner.pipeline.run(operation)
    }

    /// Execute a query.
    ///
    /// # Errors
    ///
    /// Returns whatever [`ClientError`](crate::ClientError) the pipeline produces.
    pub async fn query(&self, request: GraphQLRequest) -> OperationResult {
        self.execute(self.create_request_operation(OperationKind::Query, request))
            .await
    }

    /// Execute a mutation.
    ///
    /// # Errors
    ///
    /// Returns whatever [`ClientError`](crate::ClientError) the pipeline produces.
    pub async fn mutation(&self, request: GraphQLRequest) -> OperationResult {
        self.execute(self.create_request_operation(OperationKind::Mutation, request))
            .await
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("id", &self.inner.id)
            .field("url", &self.inner.url)
            .field("fetch_options", &self.inner.fetch_options)
            .field("exchanges", &self.inner.pipeline.names())
            .finish()
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
