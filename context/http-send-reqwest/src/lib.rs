//! reqwest-backed transport for fireblocks-core.
//!
//! Connection pooling, keep-alive, and the per-call timeout are whatever the
//! supplied [`reqwest::Client`] was built with.

use async_trait::async_trait;
use bytes::Bytes;
use fireblocks_core::{Error, HttpSend, Result};
use http_body_util::BodyExt;
use reqwest::{Client, Request};

/// HttpSend implementation carried by a [`reqwest::Client`].
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::transport_failed(format!("invalid request: {e}")).with_source(e))?;

        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport_failed(e.to_string()).with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport_failed(e.to_string()).with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
