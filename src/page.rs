//! Host framework contract for pages that render with a GraphQL client.

use async_trait::async_trait;
use gqlclient::Client;

use crate::context::RequestContext;
use crate::error::BoxError;

/// A page component.
///
/// `render` receives the live client next to the page's own props. The
/// lifecycle hook is optional: the default implementation reports that the
/// page has none by returning `Ok(None)`, in which case the page renders with
/// `Props::default()`.
#[async_trait]
pub trait Page: Send + Sync + 'static {
    /// Props the page renders from, produced by its own hook or the host.
    type Props: Default + Send + Sync + 'static;
    /// Whatever the rendering layer produces (markup, a view tree, ...).
    type Output;

    fn render(&self, client: &Client, props: &Self::Props) -> Self::Output;

    /// Fetch page data before the first render.
    ///
    /// # Errors
    ///
    /// Any error is returned to the host unchanged, wrapped in
    /// [`Error::PageInitialProps`](crate::Error::PageInitialProps).
    async fn initial_props(&self, ctx: &RequestContext) -> Result<Option<Self::Props>, BoxError> {
        let _ = ctx;
        Ok(None)
    }
}
