//! Page wrapper and client lifecycle orchestration.
//!
//! DESIGN
//! ======
//! `with_graphql_client(source)` captures configuration once. `wrap(page)`
//! produces an [`Enhanced`] page type shared by every request; it holds no
//! client. Clients live in exactly two places:
//!
//! - the [`ClientProps`] returned by one lifecycle hook invocation (one
//!   client per request, never cached between requests);
//! - the `ClientState` of one [`Mounted`] page instance.
//!
//! `ClientState` is replaced as a whole, so the stored client always matches
//! the stored options. It changes only at mount and when render sees options
//! that differ by value from the stored ones. A client handed over in props
//! without options has an unknown baseline and is kept until props carry
//! options to compare against.
//!
//! Serialized options lose their explicit exchange list. Options read from
//! props get it back from a literal source before they are compared or
//! built, so the browser client runs the same pipeline as the server one.

use std::sync::Arc;

use gqlclient::{Client, ClientOptions};

use crate::context::RequestContext;
use crate::error::Error;
use crate::init::{ExchangePolicy, Initialized, MergeExchanges, init_client};
use crate::options::OptionsSource;
use crate::page::Page;
use crate::props::ClientProps;

/// Wrapper configuration: where options come from and how exchanges merge.
#[derive(Clone, Debug)]
pub struct WithGraphqlClient {
    source: OptionsSource,
    merge: Option<MergeExchanges>,
    policy: ExchangePolicy,
}

/// Start configuring a page wrapper from literal or context-derived options.
pub fn with_graphql_client(source: impl Into<OptionsSource>) -> WithGraphqlClient {
    WithGraphqlClient { source: source.into(), merge: None, policy: ExchangePolicy::default() }
}

impl WithGraphqlClient {
    /// Rewrite the default exchange list for every client this wrapper builds.
    #[must_use]
    pub fn merge_exchanges(
        mut self,
        merge: impl Fn(Vec<gqlclient::ExchangeRef>) -> Vec<gqlclient::ExchangeRef> + Send + Sync + 'static,
    ) -> Self {
        self.merge = Some(MergeExchanges::new(merge));
        self
    }

    #[must_use]
    pub fn exchange_policy(mut self, policy: ExchangePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn source(&self) -> &OptionsSource {
        &self.source
    }

    /// Decorate `page`.
    pub fn wrap<P: Page>(&self, page: P) -> Enhanced<P> {
        Enhanced { page: Arc::new(page), config: Arc::new(self.clone()) }
    }

    fn init(&self, options: ClientOptions) -> ClientState {
        let Initialized { client, options } = init_client(options, self.merge.as_ref(), self.policy);
        ClientState { client, options: Some(options) }
    }

    /// Options taken from props, with stripped exchanges restored.
    fn props_options(&self, options: &ClientOptions) -> ClientOptions {
        self.source.restore_exchanges(options.clone())
    }

    /// Options resolved outside a lifecycle hook, with the empty context.
    fn resolve_detached(&self) -> Result<ClientOptions, Error> {
        self.source.resolve(&RequestContext::default())
    }
}

/// A client together with the options that produced it, when known.
#[derive(Clone, Debug)]
struct ClientState {
    client: Client,
    options: Option<ClientOptions>,
}

/// A wrapped page type. Cheap to clone; shared across requests.
pub struct Enhanced<P> {
    page: Arc<P>,
    config: Arc<WithGraphqlClient>,
}

impl<P> Clone for Enhanced<P> {
    fn clone(&self) -> Self {
        Self { page: Arc::clone(&self.page), config: Arc::clone(&self.config) }
    }
}

impl<P: Page> Enhanced<P> {
    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Lifecycle hook.
    ///
    /// Resolves options against `ctx`, builds this request's client, then runs
    /// the page's own hook. The page's props are nested next to the reserved
    /// client fields, so they cannot collide.
    ///
    /// # Errors
    ///
    /// [`Error::ResolveOptions`] if a derived options function fails;
    /// [`Error::PageInitialProps`] if the page's hook fails.
    pub async fn initial_props(&self, ctx: &RequestContext) -> Result<ClientProps<P::Props>, Error> {
        let options = self.config.source.resolve(ctx)?;
        let ClientState { client, options } = self.config.init(options);
        tracing::debug!(client_id = %client.id(), path = %ctx.pathname, server = ctx.is_server(), "client built in lifecycle hook");

        let page_props = self
            .page
            .initial_props(ctx)
            .await
            .map_err(Error::PageInitialProps)?
            .unwrap_or_default();

        Ok(ClientProps { client: Some(client), client_options: options, page_props })
    }

    /// Construct a page instance.
    ///
    /// - a client in `props` is stored as-is (no construction), together
    ///   with the options in `props` if there are any;
    /// - otherwise options in `props` (rehydration) or, failing that, the
    ///   source resolved with the empty context are used to build one now,
    ///   so the first render always has a client.
    ///
    /// # Errors
    ///
    /// [`Error::ResolveOptions`] if options must be resolved and that fails.
    pub fn mount(&self, props: &ClientProps<P::Props>) -> Result<Mounted<P>, Error> {
        let state = if let Some(client) = &props.client {
            tracing::debug!(client_id = %client.id(), "reusing client from props");
            let options = props.client_options.as_ref().map(|options| self.config.props_options(options));
            ClientState { client: client.clone(), options }
        } else {
            let options = match &props.client_options {
                Some(options) => self.config.props_options(options),
                None => self.config.resolve_detached()?,
            };
            let state = self.config.init(options);
            tracing::debug!(client_id = %state.client.id(), rehydrated = props.client_options.is_some(), "client built at mount");
            state
        };

        Ok(Mounted { page: Arc::clone(&self.page), config: Arc::clone(&self.config), state })
    }
}

/// A mounted page instance owning its client.
pub struct Mounted<P> {
    page: Arc<P>,
    config: Arc<WithGraphqlClient>,
    state: ClientState,
}

impl<P: Page> Mounted<P> {
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.state.client
    }

    /// Options behind the current client; `None` for a client handed over
    /// in props without options.
    #[must_use]
    pub fn options(&self) -> Option<&ClientOptions> {
        self.state.options.as_ref()
    }

    /// Render with the current props.
    ///
    /// Rebuilds the client first if the options in `props` (or, without any,
    /// the source resolved with the empty context) differ by value from the
    /// stored options. Equal options keep the same client instance. A client
    /// handed over without options is kept while props still carry none.
    ///
    /// # Errors
    ///
    /// [`Error::ResolveOptions`] if options must be resolved and that fails.
    pub fn render(&mut self, props: &ClientProps<P::Props>) -> Result<P::Output, Error> {
        self.refresh(props)?;
        Ok(self.page.render(&self.state.client, &props.page_props))
    }

    fn refresh(&mut self, props: &ClientProps<P::Props>) -> Result<(), Error> {
        let options = match (&props.client_options, &self.state.options) {
            (Some(options), _) => self.config.props_options(options),
            (None, None) => return Ok(()),
            (None, Some(_)) => self.config.resolve_detached()?,
        };
        if self.state.options.as_ref() == Some(&options) {
            return Ok(());
        }

        let previous = self.state.client.id();
        self.state = self.config.init(options);
        tracing::debug!(%previous, client_id = %self.state.client.id(), "options changed; client rebuilt before render");
        Ok(())
    }
}

#[cfg(test)]
#[path = "wrap_test.rs"]
mod tests;
