use fireblocks_core::{ApiClient, RequestOptions, Result};
use serde_json::Value;
use std::sync::Arc;

/// Methods for creating and monitoring transactions.
#[derive(Clone, Debug)]
pub struct TransactionsService {
    client: Arc<ApiClient>,
}

impl TransactionsService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List transactions, optionally filtered.
    pub async fn list(&self, filters: &[(&str, &str)]) -> Result<Value> {
        self.client.get("transactions", filters).await
    }

    /// Get a transaction by id.
    pub async fn get(&self, transaction_id: &str) -> Result<Value> {
        self.client
            .get(&format!("transactions/{transaction_id}"), &[])
            .await
    }

    /// Create a new transaction.
    ///
    /// Pass an idempotency key via `options` to let the server deduplicate
    /// retried submissions.
    pub async fn create(&self, data: &Value, options: Option<&RequestOptions>) -> Result<Value> {
        self.client.post("transactions", Some(data), options).await
    }

    /// Cancel a transaction.
    pub async fn cancel(&self, transaction_id: &str) -> Result<Value> {
        self.client
            .post(&format!("transactions/{transaction_id}/cancel"), None, None)
            .await
    }

    /// Drop a stuck transaction and replace it.
    pub async fn drop(&self, transaction_id: &str, data: &Value) -> Result<Value> {
        self.client
            .post(
                &format!("transactions/{transaction_id}/drop"),
                Some(data),
                None,
            )
            .await
    }

    /// Freeze a transaction.
    pub async fn freeze(&self, transaction_id: &str) -> Result<Value> {
        self.client
            .post(&format!("transactions/{transaction_id}/freeze"), None, None)
            .await
    }

    /// Unfreeze a transaction.
    pub async fn unfreeze(&self, transaction_id: &str) -> Result<Value> {
        self.client
            .post(
                &format!("transactions/{transaction_id}/unfreeze"),
                None,
                None,
            )
            .await
    }
}
