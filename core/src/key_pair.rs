use crate::constants::TOKEN_VALIDITY_SECS;
use crate::hash::hex_sha256;
use crate::utils::Redact;
use crate::{AuthProvider, Error, Result};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Claims embedded in every bearer token.
///
/// The service verifies this exact claim set, so field names and their wire
/// spelling (`bodyHash`) must not change.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    pub uri: String,
    pub nonce: i64,
    pub iat: i64,
    pub exp: i64,
    pub sub: String,
    #[serde(rename = "bodyHash")]
    pub body_hash: String,
}

impl Claims {
    fn new(api_key: &str, path: &str, body: Option<&[u8]>) -> Self {
        let now = chrono::Utc::now().timestamp();

        Claims {
            // Always absolute with a single leading slash.
            uri: format!("/{}", path.trim_start_matches('/')),
            nonce: now,
            iat: now,
            exp: now + TOKEN_VALIDITY_SECS,
            sub: api_key.to_string(),
            body_hash: body.map(hex_sha256).unwrap_or_default(),
        }
    }
}

/// KeyPairSigner authenticates calls with an API key and a local RSA key.
///
/// Each call gets its own RS256 JWT, issued immediately before the request is
/// sent and valid for 30 seconds. The PEM is parsed once at construction, so
/// malformed key material surfaces before any call is attempted.
#[derive(Clone)]
pub struct KeyPairSigner {
    api_key: String,
    encoding_key: EncodingKey,
}

impl Debug for KeyPairSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPairSigner")
            .field("api_key", &Redact::from(&self.api_key))
            .field("encoding_key", &"<redacted>")
            .finish()
    }
}

impl KeyPairSigner {
    /// Create a new signer from an API key and a PEM-encoded RSA private key.
    pub fn new(api_key: impl Into<String>, private_key_pem: &str) -> Result<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(|e| Error::credential_invalid("failed to parse RSA private key").with_source(e))?;

        Ok(Self {
            api_key: api_key.into(),
            encoding_key,
        })
    }
}

#[async_trait::async_trait]
impl AuthProvider for KeyPairSigner {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    async fn sign_token(&self, path: &str, body: Option<&[u8]>) -> Result<String> {
        let claims = Claims::new(&self.api_key, path, body);
        debug!("signing token for uri: {}", claims.uri);

        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)
            .map_err(|e| Error::signing_failed("failed to encode JWT").with_source(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use once_cell::sync::Lazy;
    use pretty_assertions::assert_eq;
    use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
    use rsa::RsaPrivateKey;

    // Key generation is slow; do it once per test binary.
    static TEST_KEYS: Lazy<(String, String)> = Lazy::new(|| {
        let mut rng = rand::thread_rng();
        let private = RsaPrivateKey::new(&mut rng, 2048).expect("generate test key");
        let private_pem = private
            .to_pkcs8_pem(LineEnding::LF)
            .expect("encode private key")
            .to_string();
        let public_pem = private
            .to_public_key()
            .to_public_key_pem(LineEnding::LF)
            .expect("encode public key");
        (private_pem, public_pem)
    });

    fn signer() -> KeyPairSigner {
        KeyPairSigner::new("test-api-key", &TEST_KEYS.0).expect("valid test key")
    }

    fn verify(token: &str) -> Claims {
        let key = DecodingKey::from_rsa_pem(TEST_KEYS.1.as_bytes()).expect("valid public key");
        let mut validation = Validation::new(Algorithm::RS256);
        validation.leeway = 0;
        validation.validate_aud = false;

        decode::<Claims>(token, &key, &validation)
            .expect("token must verify within its validity window")
            .claims
    }

    #[tokio::test]
    async fn test_claims_for_bodyless_request() {
        let token = signer()
            .sign_token("v1/vault/accounts", None)
            .await
            .unwrap();
        let claims = verify(&token);

        assert_eq!(claims.uri, "/v1/vault/accounts");
        assert_eq!(claims.sub, "test-api-key");
        assert_eq!(claims.exp - claims.iat, TOKEN_VALIDITY_SECS);
        assert_eq!(claims.nonce, claims.iat);
        assert_eq!(claims.body_hash, "");
    }

    #[tokio::test]
    async fn test_body_hash_covers_wire_bytes() {
        let body = serde_json::to_vec(&serde_json::json!({
            "assetId": "BTC",
            "amount": "0.5",
        }))
        .unwrap();

        let token = signer()
            .sign_token("v1/transactions", Some(&body))
            .await
            .unwrap();
        let claims = verify(&token);

        assert_eq!(claims.body_hash, hex_sha256(&body));
    }

    #[tokio::test]
    async fn test_tokens_are_never_reused() {
        let signer = signer();
        let first = signer.sign_token("v1/transactions", None).await.unwrap();
        std::thread::sleep(std::time::Duration::from_secs(1));
        let second = signer.sign_token("v1/transactions", None).await.unwrap();

        assert_ne!(first, second);
        // Both are independently verifiable within the window.
        let a = verify(&first);
        let b = verify(&second);
        assert!(b.iat > a.iat);
    }

    #[tokio::test]
    async fn test_uri_always_has_single_leading_slash() {
        let token = signer().sign_token("/v1/foo", None).await.unwrap();
        assert_eq!(verify(&token).uri, "/v1/foo");
    }

    #[test]
    fn test_token_rejected_after_validity_window() {
        // Same claim set a signer would produce, back-dated so that more
        // than 30 seconds have elapsed since issuance.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            uri: "/v1/transactions".to_string(),
            nonce: now - 31,
            iat: now - 31,
            exp: now - 31 + TOKEN_VALIDITY_SECS,
            sub: "test-api-key".to_string(),
            body_hash: String::new(),
        };
        let key = EncodingKey::from_rsa_pem(TEST_KEYS.0.as_bytes()).expect("valid test key");
        let token =
            jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key).expect("encode");

        let decoding = DecodingKey::from_rsa_pem(TEST_KEYS.1.as_bytes()).expect("valid public key");
        let mut validation = Validation::new(Algorithm::RS256);
        validation.leeway = 0;
        validation.validate_aud = false;

        let err = decode::<Claims>(&token, &decoding, &validation).unwrap_err();
        assert!(matches!(
            err.kind(),
            jsonwebtoken::errors::ErrorKind::ExpiredSignature
        ));
    }

    #[test]
    fn test_malformed_key_rejected_at_construction() {
        let err = KeyPairSigner::new("k", "not a pem").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let out = format!("{:?}", signer());
        assert!(!out.contains(&TEST_KEYS.0));
        assert!(!out.contains("test-api-key"));
    }
}
