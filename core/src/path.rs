//! Path canonicalization.
//!
//! Every caller-supplied path is brought to one canonical form before it is
//! signed or sent, so the URI embedded in the token always matches the URL
//! that goes out on the wire.

use crate::constants::API_VERSION_PREFIX;

/// Normalize an API path into its wire form.
///
/// - Strips any number of leading `/`.
/// - Prepends `v1/` unless the remainder already starts with it.
///
/// Nothing else is touched: no percent-encoding, no trailing-slash handling.
/// Query strings are appended by the dispatcher after normalization and are
/// not part of the signed payload.
///
/// The function is idempotent: `normalize_path(normalize_path(p))` equals
/// `normalize_path(p)` for every input.
pub fn normalize_path(path: &str) -> String {
    let path = path.trim_start_matches('/');

    if path.starts_with(API_VERSION_PREFIX) {
        path.to_string()
    } else {
        format!("{API_VERSION_PREFIX}{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_path() {
        let cases = vec![
            ("vault/accounts", "v1/vault/accounts"),
            ("/vault/accounts", "v1/vault/accounts"),
            ("///vault/accounts", "v1/vault/accounts"),
            ("v1/vault/accounts", "v1/vault/accounts"),
            ("/v1/vault/accounts", "v1/vault/accounts"),
            ("", "v1/"),
            ("/", "v1/"),
            // Only the prefix is inspected, not occurrences elsewhere.
            ("v1/v1/x", "v1/v1/x"),
            ("foo/v1/bar", "v1/foo/v1/bar"),
            // Prefix check is exact: "v10/..." is not the version segment.
            ("v10/foo", "v1/v10/foo"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_path(input), expected, "failed on input: {input}");
        }
    }

    #[test]
    fn test_normalize_path_idempotent() {
        let inputs = vec![
            "vault/accounts",
            "//transactions",
            "v1/supported_assets",
            "",
            "v1/v1/x",
            "webhooks/resend",
        ];

        for input in inputs {
            let once = normalize_path(input);
            assert_eq!(normalize_path(&once), once, "not idempotent for: {input}");
        }
    }
}
