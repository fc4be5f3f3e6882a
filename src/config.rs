use std::{fs, path::Path, time::Duration};

use crate::{handlers::Limits, models::Config};

const CONFIG_PATH: &str = "vidshelf.toml";

const DEFAULT_CONFIG: &str = r#"api_url = "http://127.0.0.1:3000/api"
upload_limit_bytes = 3221225472
quota_bytes = 1072668082176
warning_threshold_percent = 90
message_ttl_secs = 5
"#;

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let path = Path::new(CONFIG_PATH);

        if !path.exists() {
            fs::write(path, DEFAULT_CONFIG)?;
            tracing::info!("Created default {}", CONFIG_PATH);
        }

        let config_str = fs::read_to_string(path)?;
        let mut config = Self::parse(&config_str)?;

        if let Ok(api_url) = std::env::var("VIDSHELF_API_URL") {
            tracing::debug!("API URL overridden from environment");
            config.api_url = api_url;
        }

        Ok(config)
    }

    pub fn parse(config_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(config_str)
    }

    pub fn limits(&self) -> Limits {
        Limits {
            upload_limit_bytes: self.upload_limit_bytes,
            quota_bytes: self.quota_bytes,
            warning_threshold_percent: self.warning_threshold_percent,
            message_ttl: Duration::from_secs(self.message_ttl_secs),
        }
    }
}
