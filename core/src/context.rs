use crate::{Error, Result};
use bytes::Bytes;
use std::fmt::Debug;
use std::sync::Arc;

/// Context provides the transport used to carry API calls.
///
/// ## Important
///
/// fireblocks-core provides NO default transport. Users MUST configure an
/// [`HttpSend`] implementation; the unconfigured context returns errors when
/// asked to send.
///
/// ## Example
///
/// ```ignore
/// use fireblocks_core::Context;
///
/// let ctx = Context::new().with_http_send(my_http_client);
/// ```
#[derive(Clone)]
pub struct Context {
    http: Arc<dyn HttpSend>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context").field("http", &self.http).finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with a no-op transport.
    pub fn new() -> Self {
        Self {
            http: Arc::new(NoopHttpSend),
        }
    }

    /// Replace the HTTP client implementation.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Send http request and return the response.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }
}

/// HttpSend is used to carry one request/response round trip.
///
/// Implementations own any pooling, keep-alive, and per-call timeout policy.
/// The dispatcher treats every error from this trait as a transport failure.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// NoopHttpSend is a no-op implementation that always returns an error.
///
/// This is used when no HTTP client is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::unexpected(
            "HTTP sending not supported: no HTTP client configured",
        ))
    }
}
