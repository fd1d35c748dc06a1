/*
[INPUT]:  YAML configuration file and BITX_* environment variables
[OUTPUT]: Client configuration and optional API credentials
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use bitx_adapter::{ClientConfig, Credentials};
use serde::Deserialize;

/// Settings read from `--config`; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// API key id
    #[serde(default)]
    pub key_id: Option<String>,
    /// API key secret
    #[serde(default)]
    pub key_secret: Option<String>,
    /// API host (default "api.luno.com")
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    /// Default currency pair (e.g., "XBTZAR")
    #[serde(default)]
    pub pair: Option<String>,
    /// Extra PEM root certificate to trust
    #[serde(default)]
    pub ca_file: Option<PathBuf>,
    /// Whole-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// File settings over library defaults, then the environment on top
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = self.file_client_config()?;
        config.apply_env().context("apply BITX_* environment")?;
        Ok(config)
    }

    fn file_client_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = ClientConfig::default();
        if let Some(hostname) = &self.hostname {
            config.hostname = hostname.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(pair) = &self.pair {
            config.pair = pair.clone();
        }
        if let Some(path) = &self.ca_file {
            let pem = std::fs::read(path)
                .with_context(|| format!("read ca_file {}", path.display()))?;
            config.ca_pem = Some(pem);
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// `BITX_KEY_ID`/`BITX_KEY_SECRET` win over the file's key pair; blank keys count as unset
    pub fn credentials(&self) -> Option<Credentials> {
        Credentials::from_env().or_else(|| self.file_credentials())
    }

    fn file_credentials(&self) -> Option<Credentials> {
        let key_id = self.key_id.as_deref().filter(|v| !v.trim().is_empty())?;
        let key_secret = self.key_secret.as_deref().filter(|v| !v.trim().is_empty())?;
        Some(Credentials::new(key_id, key_secret))
    }
}
