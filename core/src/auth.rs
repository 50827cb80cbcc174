use crate::Result;
use std::fmt::Debug;

/// AuthProvider is the capability the dispatcher needs to authenticate a call.
///
/// The concrete scheme is pluggable: the bundled [`KeyPairSigner`] signs with
/// a local RSA key, but a hardware-backed key or a delegated signing service
/// can be substituted without touching the dispatcher.
///
/// [`KeyPairSigner`]: crate::KeyPairSigner
#[async_trait::async_trait]
pub trait AuthProvider: Debug + Send + Sync + 'static {
    /// The static identifier sent with every request in the `X-API-Key` header.
    fn api_key(&self) -> &str;

    /// Produce a fresh bearer token for one outbound call.
    ///
    /// ## Path
    ///
    /// `path` is the normalized path (see [`normalize_path`]) without a query
    /// string; the token binds to exactly this resource.
    ///
    /// ## Body
    ///
    /// `body` is the exact serialized bytes that will be transmitted, or
    /// `None` for body-less requests. Hashing the wire bytes rather than a
    /// re-serialization keeps the body hash and the payload in lockstep even
    /// when the serializer's key ordering is not canonical.
    ///
    /// Tokens are valid for a short fixed window and must never be cached or
    /// reused; the dispatcher calls this once per outbound request.
    ///
    /// [`normalize_path`]: crate::normalize_path
    async fn sign_token(&self, path: &str, body: Option<&[u8]>) -> Result<String>;
}
