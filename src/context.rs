//! Per-request data handed to the lifecycle hook by the host.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Render callback for the whole app tree, available to prefetching hooks.
#[derive(Clone)]
pub struct AppTree(Arc<dyn Fn() -> String + Send + Sync>);

impl AppTree {
    pub fn new(render: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    #[must_use]
    pub fn render(&self) -> String {
        (self.0)()
    }
}

impl fmt::Debug for AppTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppTree(..)")
    }
}

/// The incoming HTTP request, present only when the hook runs on the server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncomingRequest {
    pub method: String,
    pub url: String,
    /// Header map keyed by lower-cased header name.
    pub headers: BTreeMap<String, String>,
}

impl IncomingRequest {
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self { method: method.into(), url: url.into(), headers: BTreeMap::new() }
    }

    /// Add a header; the name is stored lower-cased.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Host-supplied context for one lifecycle hook invocation.
///
/// Never mutated by this crate. [`RequestContext::default`] is the
/// best-effort empty context used when options must be resolved outside a
/// hook (browser mount and render).
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    pub pathname: String,
    pub query: BTreeMap<String, String>,
    pub as_path: String,
    pub req: Option<IncomingRequest>,
    pub app_tree: Option<AppTree>,
}

impl RequestContext {
    #[must_use]
    pub fn new(pathname: impl Into<String>) -> Self {
        let pathname = pathname.into();
        Self { as_path: pathname.clone(), pathname, ..Self::default() }
    }

    #[must_use]
    pub fn with_query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_as_path(mut self, as_path: impl Into<String>) -> Self {
        self.as_path = as_path.into();
        self
    }

    #[must_use]
    pub fn with_request(mut self, req: IncomingRequest) -> Self {
        self.req = Some(req);
        self
    }

    #[must_use]
    pub fn with_app_tree(mut self, app_tree: AppTree) -> Self {
        self.app_tree = Some(app_tree);
        self
    }

    /// Header of the incoming request, if there is one.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.req.as_ref().and_then(|req| req.header(name))
    }

    /// Whether the hook is running on the server for a real request.
    #[must_use]
    pub fn is_server(&self) -> bool {
        self.req.is_some()
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
