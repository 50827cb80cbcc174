use fireblocks_core::{ApiClient, Result};
use serde_json::Value;
use std::sync::Arc;

/// Methods for webhook delivery management.
///
/// Inbound webhook signature verification is deliberately not provided:
/// the service's signing scheme for webhook payloads is not published, and
/// shipping a verifier that cannot actually verify would be worse than none.
/// Resend what you missed and reconcile via [`TransactionsService::get`]
/// instead.
///
/// [`TransactionsService::get`]: crate::TransactionsService::get
#[derive(Clone, Debug)]
pub struct WebhooksService {
    client: Arc<ApiClient>,
}

impl WebhooksService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Resend all failed webhook notifications.
    pub async fn resend_all(&self) -> Result<Value> {
        self.client.post("webhooks/resend", None, None).await
    }

    /// Resend webhook notifications matching the given criteria.
    pub async fn resend(&self, data: &Value) -> Result<Value> {
        self.client.post("webhooks/resend", Some(data), None).await
    }
}
