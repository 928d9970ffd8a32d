use crate::error::AppError;
use config::{Config as Cfg, Environment};
use serde::de::DeserializeOwned;

/// Prefix shared by every environment variable the function reads.
pub const ENV_PREFIX: &str = "APP";

/// Variable name to value, as read from the environment.
pub type VarMap = config::Map<String, String>;

/// Load settings from the process environment, after applying any `.env` file.
pub fn load<T: DeserializeOwned>() -> Result<T, AppError> {
    dotenvy::dotenv().ok();
    load_from(None)
}

/// Load settings from an explicit variable map instead of the process
/// environment. `None` falls back to the real environment.
pub fn load_from<T: DeserializeOwned>(vars: Option<VarMap>) -> Result<T, AppError> {
    let config = Cfg::builder()
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(vars),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
