use crate::config::Settings;
use crate::models::UserRecord;
use crate::services::attribute::item_to_record;
use crate::services::UserStore;
use anyhow::Context;
use async_trait::async_trait;
use aws_config::{retry::RetryConfig, BehaviorVersion, Region};
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client};

/// User records backed by a DynamoDB table.
pub struct DynamoUserStore {
    // Client wraps an Arc, shared by all invocations in this process
    client: Client,
    table: String,
    key_attribute: String,
    consistent_read: bool,
}

impl DynamoUserStore {
    pub fn new(
        client: Client,
        table: impl Into<String>,
        key_attribute: impl Into<String>,
        consistent_read: bool,
    ) -> Self {
        Self {
            client,
            table: table.into(),
            key_attribute: key_attribute.into(),
            consistent_read,
        }
    }

    /// Build the client from the SDK's default provider chain. Retries are
    /// disabled: each lookup is sent exactly once.
    pub async fn from_settings(settings: &Settings) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());
        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        tracing::info!(
            table = %settings.table_name,
            key_attribute = %settings.key_attribute,
            consistent_read = settings.consistent_read,
            region = ?sdk_config.region(),
            "DynamoDB user store initialized"
        );

        Self::new(
            Client::new(&sdk_config),
            settings.table_name.clone(),
            settings.key_attribute.clone(),
            settings.consistent_read,
        )
    }
}

#[async_trait]
impl UserStore for DynamoUserStore {
    async fn get_user(&self, user_id: &str) -> Result<Option<UserRecord>, anyhow::Error> {
        let output = self
            .client
            .get_item()
            .table_name(self.table.as_str())
            .key(
                self.key_attribute.as_str(),
                AttributeValue::S(user_id.to_string()),
            )
            .consistent_read(self.consistent_read)
            .send()
            .await
            .map_err(|e| {
                anyhow::anyhow!(
                    "GetItem on table '{}' failed: {}",
                    self.table,
                    DisplayErrorContext(&e)
                )
            })?;

        output
            .item
            .map(item_to_record)
            .transpose()
            .with_context(|| format!("Malformed item in table '{}'", self.table))
    }
}
