//! # graphql-page
//!
//! Attach a GraphQL client to server-rendered pages.
//!
//! A page is wrapped once with [`with_graphql_client`]. The wrapped page
//! ([`Enhanced`]) then owns the client lifecycle across the host framework's
//! three entry points:
//!
//! - **lifecycle hook** ([`Enhanced::initial_props`]): runs per request on the
//!   server (and per navigation in the browser), resolves options against the
//!   real [`RequestContext`], builds a client, and returns [`ClientProps`];
//! - **mount** ([`Enhanced::mount`]): reuses a client handed over in props, or
//!   rebuilds one from serialized options (rehydration), or builds one eagerly
//!   so the first render always has a client;
//! - **render** ([`Mounted::render`]): rebuilds only when the options in props
//!   differ by value from the ones behind the current client.
//!
//! ```rust,ignore
//! use graphql_page::{OptionsSource, with_graphql_client};
//! use gqlclient::{ClientOptions, FetchOptions};
//!
//! let home = with_graphql_client(OptionsSource::derived(|ctx| {
//!     let token = ctx.header("authorization").unwrap_or_default();
//!     Ok(ClientOptions::new("https://graphql-pokemon.now.sh")
//!         .with_fetch_options(FetchOptions::new().header("Authorization", format!("Bearer {token}"))))
//! }))
//! .wrap(HomePage);
//!
//! let props = home.initial_props(&ctx).await?;
//! let mut page = home.mount(&props)?;
//! let html = page.render(&props)?;
//! ```

mod context;
mod error;
mod init;
mod options;
mod page;
mod props;
mod wrap;

#[cfg(feature = "leptos")]
pub mod provider;

pub use context::{AppTree, IncomingRequest, RequestContext};
pub use error::{BoxError, Error};
pub use init::{ExchangePolicy, Initialized, MergeExchanges, init_client};
pub use options::OptionsSource;
pub use page::Page;
pub use props::ClientProps;
pub use wrap::{Enhanced, Mounted, WithGraphqlClient, with_graphql_client};

pub use gqlclient;
