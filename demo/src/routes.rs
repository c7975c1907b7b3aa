//! Router assembly and the server-side render pipeline.
//!
//! Each page request runs the wrapped page's lifecycle hook, mounts it with
//! the resulting props (reusing the request's client), renders, and embeds
//! the serialized props so the browser can rebuild an equivalent client.

use std::collections::BTreeMap;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use graphql_page::{Enhanced, IncomingRequest, Page, RequestContext};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::config::DemoConfig;
use crate::pages::{self, AppShell, HomePage};

/// Element id of the embedded props payload.
pub const PROPS_SCRIPT_ID: &str = "__PAGE_PROPS__";

#[derive(Clone)]
pub struct DemoState {
    home: Enhanced<HomePage>,
    app: Enhanced<AppShell>,
}

impl DemoState {
    #[must_use]
    pub fn new(config: &DemoConfig) -> Self {
        Self { home: pages::home(config), app: pages::app(config) }
    }
}

pub fn app(config: &DemoConfig) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/app", get(app_shell))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(DemoState::new(config))
}

async fn home(
    State(state): State<DemoState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<BTreeMap<String, String>>,
) -> Result<Html<String>, PageError> {
    let ctx = request_context(&method, &uri, &headers, query);
    render_page(&state.home, &ctx).await
}

async fn app_shell(
    State(state): State<DemoState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<BTreeMap<String, String>>,
) -> Result<Html<String>, PageError> {
    let ctx = request_context(&method, &uri, &headers, query);
    render_page(&state.app, &ctx).await
}

async fn healthz() -> &'static str {
    "ok"
}

/// Build the hook context for one HTTP request. Non-UTF-8 header values are
/// skipped.
pub fn request_context(method: &Method, uri: &Uri, headers: &HeaderMap, query: BTreeMap<String, String>) -> RequestContext {
    let as_path = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_owned(), |pq| pq.as_str().to_owned());

    let mut req = IncomingRequest::new(method.as_str(), uri.to_string());
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            req = req.with_header(name.as_str(), value);
        }
    }

    RequestContext::new(uri.path())
        .with_as_path(as_path)
        .with_query(query)
        .with_request(req)
}

/// Hook, mount, render, and wrap in a document with the props payload.
///
/// # Errors
///
/// Returns [`PageError`] when the hook, mount, render, or props encoding fails.
pub async fn render_page<P>(page: &Enhanced<P>, ctx: &RequestContext) -> Result<Html<String>, PageError>
where
    P: Page<Output = String>,
    P::Props: Serialize,
{
    let props = page.initial_props(ctx).await?;
    let mut mounted = page.mount(&props)?;
    let body = mounted.render(&props)?;
    let payload = props.to_json()?;
    Ok(Html(document(&body, &payload)))
}

fn document(body: &str, payload: &str) -> String {
    // `</` inside a script element would end it early.
    let payload = payload.replace("</", "<\\/");
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/></head><body>{body}\
         <script type=\"application/json\" id=\"{PROPS_SCRIPT_ID}\">{payload}</script></body></html>"
    )
}

/// A failed page render, reported as HTTP 500.
#[derive(Debug)]
pub struct PageError(graphql_page::Error);

impl From<graphql_page::Error> for PageError {
    fn from(err: graphql_page::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "page render failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "page render failed").into_response()
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
