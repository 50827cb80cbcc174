use fireblocks_core::{ApiClient, Result};
use serde_json::Value;
use std::sync::Arc;

/// Methods for managing vault accounts.
#[derive(Clone, Debug)]
pub struct VaultsService {
    client: Arc<ApiClient>,
}

impl VaultsService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List vault accounts, optionally filtered.
    pub async fn list(&self, filters: &[(&str, &str)]) -> Result<Value> {
        self.client.get("vault/accounts", filters).await
    }

    /// Get a vault account by id.
    pub async fn get(&self, vault_account_id: &str) -> Result<Value> {
        self.client
            .get(&format!("vault/accounts/{vault_account_id}"), &[])
            .await
    }

    /// Create a new vault account.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.client.post("vault/accounts", Some(data), None).await
    }

    /// Update a vault account.
    pub async fn update(&self, vault_account_id: &str, data: &Value) -> Result<Value> {
        self.client
            .put(&format!("vault/accounts/{vault_account_id}"), Some(data))
            .await
    }

    /// Hide a vault account from the console.
    pub async fn hide(&self, vault_account_id: &str) -> Result<Value> {
        self.client
            .post(&format!("vault/accounts/{vault_account_id}/hide"), None, None)
            .await
    }

    /// Unhide a vault account.
    pub async fn unhide(&self, vault_account_id: &str) -> Result<Value> {
        self.client
            .post(
                &format!("vault/accounts/{vault_account_id}/unhide"),
                None,
                None,
            )
            .await
    }

    /// Create a wallet for an asset under a vault account.
    pub async fn create_wallet(&self, vault_account_id: &str, asset_id: &str) -> Result<Value> {
        self.client
            .post(
                &format!("vault/accounts/{vault_account_id}/{asset_id}"),
                None,
                None,
            )
            .await
    }

    /// Create a deposit address for a vault wallet.
    pub async fn create_deposit_address(
        &self,
        vault_account_id: &str,
        asset_id: &str,
        data: Option<&Value>,
    ) -> Result<Value> {
        self.client
            .post(
                &format!("vault/accounts/{vault_account_id}/{asset_id}/addresses"),
                data,
                None,
            )
            .await
    }

    /// Get a vault account's asset balances, optionally filtered.
    pub async fn get_assets(
        &self,
        vault_account_id: &str,
        filters: &[(&str, &str)],
    ) -> Result<Value> {
        self.client
            .get(&format!("vault/accounts/{vault_account_id}"), filters)
            .await
    }

    /// Get one asset's balance under a vault account.
    pub async fn get_asset(&self, vault_account_id: &str, asset_id: &str) -> Result<Value> {
        self.client
            .get(&format!("vault/accounts/{vault_account_id}/{asset_id}"), &[])
            .await
    }
}
