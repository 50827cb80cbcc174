use fireblocks_core::{ApiClient, Result};
use serde_json::Value;
use std::sync::Arc;

/// Methods for supported assets and network connections.
#[derive(Clone, Debug)]
pub struct AssetsService {
    client: Arc<ApiClient>,
}

impl AssetsService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List all supported assets.
    pub async fn list(&self) -> Result<Value> {
        self.client.get("supported_assets", &[]).await
    }

    /// Get one supported asset by id.
    pub async fn get(&self, asset_id: &str) -> Result<Value> {
        self.client
            .get(&format!("supported_assets/{asset_id}"), &[])
            .await
    }

    /// List asset types.
    pub async fn types(&self) -> Result<Value> {
        self.client.get("asset_types", &[]).await
    }

    /// List network connections.
    pub async fn network_connections(&self) -> Result<Value> {
        self.client.get("network_connections", &[]).await
    }

    /// Get a network connection by id.
    pub async fn network_connection(&self, connection_id: &str) -> Result<Value> {
        self.client
            .get(&format!("network_connections/{connection_id}"), &[])
            .await
    }
}
