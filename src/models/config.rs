//! Configuration model loaded from external sources.

use std::env;

use config::{Config, ConfigError};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::gateway::telegram::DEFAULT_API_URL;
use crate::services::relay::RelaySettings;

fn default_static_dir() -> String {
    "./assets".to_string()
}

fn default_telegram_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Configuration of the landing page server and its relay.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Directory holding the landing page's static assets.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,
    #[serde(default)]
    pub telegram_bot_token: Option<String>,
    #[serde(default)]
    pub telegram_chat_id: Option<String>,
}

impl ServerConfig {
    /// Relay secrets as currently configured; absence is reported per request.
    pub fn relay_settings(&self) -> RelaySettings {
        RelaySettings {
            bot_token: self.telegram_bot_token.clone(),
            chat_id: self.telegram_chat_id.clone(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
/// Configuration of the `send_lead` command line client.
pub struct ClientConfig {
    /// Full URL of the relay endpoint.
    pub relay_url: String,
}

/// Loads configuration layered from `config/default.yaml`,
/// `config/{APP_ENV}.yaml`, `APP_*` variables and the bare
/// `TELEGRAM_BOT_TOKEN` / `TELEGRAM_CHAT_ID` variables.
pub fn load_config<T: DeserializeOwned>() -> Result<T, ConfigError> {
    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .set_override_option("telegram_bot_token", env::var("TELEGRAM_BOT_TOKEN").ok())?
        .set_override_option("telegram_chat_id", env::var("TELEGRAM_CHAT_ID").ok())?
        .build()?
        .try_deserialize::<T>()
}
