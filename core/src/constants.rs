//! Constants shared across the client.

/// Header carrying the static API-key identifier.
pub const X_API_KEY: &str = "x-api-key";

/// Header carrying the caller-supplied idempotency key on POST.
pub const IDEMPOTENCY_KEY: &str = "idempotency-key";

/// Version segment every API path is rooted under.
pub const API_VERSION_PREFIX: &str = "v1/";

/// Lifetime of one bearer token, fixed by the service.
pub const TOKEN_VALIDITY_SECS: i64 = 30;

/// Name reported in the user-agent string.
pub const SDK_NAME: &str = "fireblocks-sdk-rust";

/// Build-time SDK version, embedded in the user-agent string.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
