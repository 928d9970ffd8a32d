use serde::Deserialize;
use service_core::error::AppError;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    /// DynamoDB table holding the user records.
    #[serde(default = "default_table_name")]
    pub table_name: String,
    /// Partition key attribute of the table.
    #[serde(default = "default_key_attribute")]
    pub key_attribute: String,
    /// Use strongly consistent reads instead of eventually consistent ones.
    #[serde(default)]
    pub consistent_read: bool,
    /// Region override. Falls back to the SDK's default provider chain.
    #[serde(default)]
    pub region: Option<String>,
    /// Endpoint override, e.g. a local DynamoDB emulator.
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct CorsSettings {
    #[serde(default = "default_allow_origin")]
    pub allow_origin: String,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allow_origin: default_allow_origin(),
        }
    }
}

fn default_table_name() -> String {
    "UsersTable".to_string()
}

fn default_key_attribute() -> String {
    "userId".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_allow_origin() -> String {
    "*".to_string()
}

impl Settings {
    pub fn load() -> Result<Self, AppError> {
        service_core::config::load()
    }

    pub fn from_vars(vars: service_core::config::VarMap) -> Result<Self, AppError> {
        service_core::config::load_from(Some(vars))
    }
}
