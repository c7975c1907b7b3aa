//! Demo pages.
//!
//! `home` derives its client options from the incoming request (forwarding
//! the caller's `Authorization` header); `app` uses literal options and runs
//! its own lifecycle hook next to the wrapper's.

use async_trait::async_trait;
use gqlclient::{Client, ClientOptions, FetchOptions};
use graphql_page::{BoxError, Enhanced, OptionsSource, Page, RequestContext, with_graphql_client};
use serde::{Deserialize, Serialize};

use crate::config::DemoConfig;

/// Landing page listing the configured endpoint.
pub struct HomePage;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HomeProps {}

impl Page for HomePage {
    type Props = HomeProps;
    type Output = String;

    fn render(&self, client: &Client, _props: &HomeProps) -> String {
        format!(
            "<main><h1>Home</h1><section class=\"pokemon-list\" data-endpoint=\"{}\"></section></main>",
            escape(client.url())
        )
    }
}

/// App shell whose hook records the requested path.
pub struct AppShell;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppProps {
    pub path: String,
}

#[async_trait]
impl Page for AppShell {
    type Props = AppProps;
    type Output = String;

    fn render(&self, client: &Client, props: &AppProps) -> String {
        format!(
            "<main><h1>{}</h1><p>client {}</p></main>",
            escape(&props.path),
            client.id()
        )
    }

    async fn initial_props(&self, ctx: &RequestContext) -> Result<Option<AppProps>, BoxError> {
        Ok(Some(AppProps { path: ctx.as_path.clone() }))
    }
}

/// Options derived per request: `Authorization: Bearer <caller's token>`.
pub fn home(config: &DemoConfig) -> Enhanced<HomePage> {
    let url = config.graphql_url.clone();
    let credentials = config.credentials;
    with_graphql_client(OptionsSource::derived(move |ctx| {
        let req = ctx.req.as_ref().ok_or("home options need the incoming request")?;
        let token = req.header("authorization").unwrap_or_default();
        let mut fetch = FetchOptions::new().header("Authorization", format!("Bearer {token}"));
        fetch.credentials = credentials;
        Ok(ClientOptions::new(url.clone()).with_fetch_options(fetch))
    }))
    .wrap(HomePage)
}

/// Literal options shared by every request.
pub fn app(config: &DemoConfig) -> Enhanced<AppShell> {
    let mut options = ClientOptions::new(config.graphql_url.clone());
    if let Some(credentials) = config.credentials {
        options = options.with_fetch_options(FetchOptions::new().credentials(credentials));
    }
    with_graphql_client(options).wrap(AppShell)
}

/// Minimal HTML text escaping.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
