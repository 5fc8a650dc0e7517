use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("ordens.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config: Config = serde_json::from_str("{}").expect("empty config should deserialize");
        assert_eq!(config.storage_path, PathBuf::from("ordens.json"));
        assert_eq!(config.log_level, "info");
    }
}
