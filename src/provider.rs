//! Leptos context integration.
//!
//! A mounted page hands its client to the component tree through Leptos
//! context, so nested components reach it with [`use_client`] instead of
//! threading it through props.
//!
//! ```rust,ignore
//! #[component]
//! fn Home(client: Client) -> impl IntoView {
//!     view! {
//!         <GraphqlClientProvider client=client>
//!             <PokemonList/>
//!         </GraphqlClientProvider>
//!     }
//! }
//! ```

use gqlclient::Client;
use leptos::prelude::*;

/// Make `client` available to the current owner and its descendants.
pub fn provide_client(client: Client) {
    provide_context(client);
}

/// The nearest provided client, if any.
#[must_use]
pub fn use_client() -> Option<Client> {
    use_context::<Client>()
}

/// The nearest provided client.
///
/// # Panics
///
/// Panics if no ancestor provided a client.
#[must_use]
pub fn expect_client() -> Client {
    expect_context::<Client>()
}

/// Provides `client` to `children`.
#[component]
pub fn GraphqlClientProvider(
    /// Client handed down by the page wrapper
    client: Client,
    /// Child components
    children: Children,
) -> impl IntoView {
    provide_client(client);
    children()
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;
