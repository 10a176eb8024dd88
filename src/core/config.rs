use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct AutocompleteConfig {
    pub uac_port: u16,
    pub uac_url: String,
    pub log_level: String,
    pub cors_origin: String,
    pub user_db: UserDbConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UserDbConfig {
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub max_connections: u32,
}

impl AutocompleteConfig {
    pub fn new_config(mode: &str) -> Result<Self, ConfigError> {
        //layering the different sources, default values first, overwritten by the mode file and env-vars
        let config = Config::builder()
            .add_source(File::with_name("default.config.toml"))
            .add_source(File::with_name(&format!("{mode}.config.toml")).required(false))
            .add_source(Environment::with_prefix("UAC").separator("__"))
            .build()?;
        config.try_deserialize()
    }
}
