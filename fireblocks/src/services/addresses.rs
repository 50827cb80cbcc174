use fireblocks_core::{ApiClient, Result};
use serde_json::{json, Value};
use std::sync::Arc;

/// Methods for generating and validating deposit addresses.
#[derive(Clone, Debug)]
pub struct AddressesService {
    client: Arc<ApiClient>,
}

impl AddressesService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Generate a new address for an asset under a vault account.
    ///
    /// Extra generation options (description, customer ref id, ...) are
    /// merged into the request body verbatim.
    pub async fn generate(
        &self,
        vault_account_id: &str,
        asset_id: &str,
        extra: Option<&Value>,
    ) -> Result<Value> {
        let mut data = json!({
            "vaultAccountId": vault_account_id,
            "assetId": asset_id,
        });
        merge_object(&mut data, extra);

        self.client
            .post("vault/accounts/generate_address", Some(&data), None)
            .await
    }

    /// List addresses of a vault wallet.
    pub async fn list(
        &self,
        vault_account_id: &str,
        asset_id: &str,
        filters: &[(&str, &str)],
    ) -> Result<Value> {
        self.client
            .get(
                &format!("vault/accounts/{vault_account_id}/{asset_id}/addresses"),
                filters,
            )
            .await
    }

    /// Validate an address for an asset.
    pub async fn validate(&self, asset_id: &str, address: &str) -> Result<Value> {
        let data = json!({
            "assetId": asset_id,
            "address": address,
        });

        self.client
            .post("transactions/validate_address", Some(&data), None)
            .await
    }

    /// Get public key information for a derivation path.
    pub async fn public_key_info(
        &self,
        vault_account_id: &str,
        asset_id: &str,
        change: u64,
        address_index: u64,
    ) -> Result<Value> {
        let data = json!({
            "vaultAccountId": vault_account_id,
            "assetId": asset_id,
            "change": change,
            "addressIndex": address_index,
        });

        self.client
            .post("vault/accounts/public_key_info", Some(&data), None)
            .await
    }
}

fn merge_object(data: &mut Value, extra: Option<&Value>) {
    if let (Value::Object(data), Some(Value::Object(extra))) = (data, extra) {
        for (k, v) in extra {
            data.insert(k.clone(), v.clone());
        }
    }
}
