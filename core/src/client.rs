use crate::constants::{IDEMPOTENCY_KEY, SDK_NAME, SDK_VERSION, X_API_KEY};
use crate::path::normalize_path;
use crate::{AuthProvider, Context, Error, Result};
use bytes::Bytes;
use http::{header, Method};
use log::debug;
use serde_json::Value;
use std::sync::Arc;

/// Immutable per-client configuration, shared read-only by all calls.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL all paths are resolved against.
    pub base_url: String,
    /// Suppress host platform details in the user-agent string.
    pub anonymous_platform: bool,
    /// Optional prefix prepended to the user-agent string.
    pub user_agent_prefix: Option<String>,
    /// Treat non-2xx responses as errors instead of returning their payload.
    ///
    /// The reference client returns whatever JSON the server sends regardless
    /// of status code; this flag opts into status-based classification.
    pub strict_status: bool,
}

impl ClientConfig {
    /// Create a config for the given base URL with default behavior.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anonymous_platform: false,
            user_agent_prefix: None,
            strict_status: false,
        }
    }

    /// Suppress platform details in the user-agent string.
    pub fn with_anonymous_platform(mut self) -> Self {
        self.anonymous_platform = true;
        self
    }

    /// Prepend a caller-supplied prefix to the user-agent string.
    pub fn with_user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Turn non-2xx responses into [`ErrorKind::ApiRejected`] errors.
    ///
    /// [`ErrorKind::ApiRejected`]: crate::ErrorKind::ApiRejected
    pub fn with_strict_status(mut self) -> Self {
        self.strict_status = true;
        self
    }
}

/// Per-request options forwarded by the resource wrappers.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// Caller-supplied key letting the server deduplicate retried POSTs.
    pub idempotency_key: Option<String>,
}

impl RequestOptions {
    /// Create empty request options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the idempotency key.
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }
}

/// ApiClient turns logical operations into authenticated HTTP requests.
///
/// Every call runs the same sequence: normalize the path, serialize the body
/// once, sign a fresh token bound to that (path, body) pair, send, and parse
/// the response as JSON. There is no retry, no caching, and no shared mutable
/// state, so one client may issue many concurrent calls.
#[derive(Clone, Debug)]
pub struct ApiClient {
    ctx: Context,
    auth: Arc<dyn AuthProvider>,
    config: ClientConfig,
    user_agent: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(ctx: Context, auth: impl AuthProvider, config: ClientConfig) -> Self {
        let user_agent = build_user_agent(&config);

        Self {
            ctx,
            auth: Arc::new(auth),
            config,
            user_agent,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Make a GET request.
    ///
    /// Query parameters are percent-encoded and appended to the normalized
    /// path for transport; the signed URI excludes the query string.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let path = normalize_path(path);
        let token = self.auth.sign_token(&path, None).await?;

        let path_and_query = if query.is_empty() {
            path
        } else {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            format!("{path}?{encoded}")
        };

        self.dispatch(Method::GET, &path_and_query, token, None, None)
            .await
    }

    /// Make a POST request.
    pub async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        let path = normalize_path(path);
        let body = serialize_body(body)?;
        let token = self.auth.sign_token(&path, body.as_deref()).await?;
        let idempotency_key = options.and_then(|o| o.idempotency_key.as_deref());

        self.dispatch(Method::POST, &path, token, body, idempotency_key)
            .await
    }

    /// Make a PUT request.
    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        let path = normalize_path(path);
        let body = serialize_body(body)?;
        let token = self.auth.sign_token(&path, body.as_deref()).await?;

        self.dispatch(Method::PUT, &path, token, body, None).await
    }

    /// Make a PATCH request.
    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        let path = normalize_path(path);
        let body = serialize_body(body)?;
        let token = self.auth.sign_token(&path, body.as_deref()).await?;

        self.dispatch(Method::PATCH, &path, token, body, None).await
    }

    /// Make a DELETE request. DELETE never carries a body.
    pub async fn delete(&self, path: &str) -> Result<Value> {
        let path = normalize_path(path);
        let token = self.auth.sign_token(&path, None).await?;

        self.dispatch(Method::DELETE, &path, token, None, None).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path_and_query: &str,
        token: String,
        body: Option<Vec<u8>>,
        idempotency_key: Option<&str>,
    ) -> Result<Value> {
        let uri = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path_and_query
        );
        debug!("sending {method} {uri}");

        let mut builder = http::Request::builder()
            .method(method.clone())
            .uri(&uri)
            .header(X_API_KEY, self.auth.api_key())
            .header(header::USER_AGENT, &self.user_agent)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");

        if let Some(key) = idempotency_key {
            builder = builder.header(IDEMPOTENCY_KEY, key);
        }

        let mut req = builder.body(Bytes::from(body.unwrap_or_default()))?;
        req.headers_mut().insert(header::AUTHORIZATION, {
            let mut value: http::HeaderValue = format!("Bearer {token}").parse()?;
            value.set_sensitive(true);
            value
        });

        let resp = self.ctx.http_send(req).await.map_err(|e| {
            Error::transport_failed(format!("{method} request failed: {e}")).with_source(e)
        })?;

        let status = resp.status();
        debug!("received {status} for {method} {uri}");

        let body = resp.into_body();
        let payload = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).map_err(|e| {
                Error::response_invalid(format!("failed to parse response body as JSON: {e}"))
                    .with_source(e)
            })?
        };

        // Compatibility with the reference client: the payload is returned
        // regardless of HTTP status unless strict mode is enabled.
        if self.config.strict_status && !status.is_success() {
            return Err(Error::api_rejected(format!("api returned status {status}"))
                .with_status(status)
                .with_response(payload));
        }

        Ok(payload)
    }
}

fn serialize_body(body: Option<&Value>) -> Result<Option<Vec<u8>>> {
    // Serialized exactly once; the same bytes are hashed and transmitted.
    body.map(|v| {
        serde_json::to_vec(v).map_err(|e| {
            Error::request_invalid(format!("failed to serialize request body: {e}")).with_source(e)
        })
    })
    .transpose()
}

fn build_user_agent(config: &ClientConfig) -> String {
    let mut ua = format!("{SDK_NAME}/{SDK_VERSION}");

    if !config.anonymous_platform {
        ua.push_str(&format!(
            " ({}; {})",
            std::env::consts::OS,
            std::env::consts::ARCH
        ));
    }

    match &config.user_agent_prefix {
        Some(prefix) => format!("{prefix} {ua}"),
        None => ua,
    }
}
