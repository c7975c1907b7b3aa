//! Operation and response types carried through the pipeline.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;
use crate::options::FetchOptions;

/// Result of running one operation through a pipeline.
pub type OperationResult = Result<GraphQLResponse, ClientError>;

/// GraphQL operation type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

/// Stable identity of a request: a hash of the query text and variables.
///
/// Identical requests share a key, which is what the dedup exchange groups on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationKey(u64);

impl OperationKey {
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// A GraphQL request body as sent over HTTP.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "operationName")]
    pub operation_name: Option<String>,
}

impl GraphQLRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), variables: None, operation_name: None }
    }

    /// Attach variables.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `variables` has no JSON form.
    pub fn variables(mut self, variables: impl Serialize) -> Result<Self, serde_json::Error> {
        self.variables = Some(serde_json::to_value(variables)?);
        Ok(self)
    }

    #[must_use]
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Compute the request key from query text and variables.
    #[must_use]
    pub fn key(&self) -> OperationKey {
        let mut hasher = DefaultHasher::new();
        self.query.trim().hash(&mut hasher);
        if let Some(variables) = &self.variables {
            variables.to_string().hash(&mut hasher);
        }
        OperationKey(hasher.finish())
    }
}

/// Client-level context stamped onto every operation.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationContext {
    pub url: String,
    pub fetch_options: Option<FetchOptions>,
}

/// A request bound to a client, ready to run through its exchanges.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub key: OperationKey,
    pub kind: OperationKind,
    pub request: GraphQLRequest,
    pub context: OperationContext,
}

/// A single entry of a GraphQL `errors` array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphQLErrorEntry {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// Standard GraphQL response envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLErrorEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphQLResponse {
    /// Build a data-only response.
    #[must_use]
    pub fn from_data(data: Value) -> Self {
        Self { data: Some(data), errors: Vec::new(), extensions: None }
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
