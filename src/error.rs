//! Error types.
//!
//! Nothing here is recovered locally. Failures surface to whichever caller
//! triggered option resolution or the page hook.

/// Boxed error returned by integrator callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A context-derived options function failed.
    #[error("client options resolution failed: {0}")]
    ResolveOptions(#[source] BoxError),

    /// The wrapped page's own lifecycle hook failed.
    #[error("page initial props failed: {0}")]
    PageInitialProps(#[source] BoxError),

    /// Page props could not be serialized for, or read back from, the
    /// browser payload.
    #[error("page props encoding failed: {0}")]
    Props(#[from] serde_json::Error),
}
