//! Props exchanged between the lifecycle hook, the host, and the page.
//!
//! The page's own props are nested under `pageProps`, so nothing a page
//! returns can shadow the reserved `clientOptions` key. The live client is
//! never serialized: crossing to the browser carries only the options, and
//! the browser mount rebuilds an equivalent client from them.

use gqlclient::{Client, ClientOptions};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Result of the lifecycle hook, forwarded by the host as page props.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProps<T> {
    /// Client built by the hook in this process, if any.
    #[serde(skip)]
    pub client: Option<Client>,
    /// Options the hook resolved; the rehydration input in the browser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_options: Option<ClientOptions>,
    pub page_props: T,
}

impl<T> ClientProps<T> {
    /// Props with no client and no options, as a host renders a page whose
    /// hook has not run.
    pub fn new(page_props: T) -> Self {
        Self { client: None, client_options: None, page_props }
    }

    /// Drop the live client, keeping what survives serialization.
    #[must_use]
    pub fn dehydrated(mut self) -> Self {
        self.client = None;
        self
    }
}

impl<T: Serialize> ClientProps<T> {
    /// Encode for the browser payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Props`] if the page props fail to serialize.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned> ClientProps<T> {
    /// Decode a browser payload. The result never carries a client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Props`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
#[path = "props_test.rs"]
mod tests;
