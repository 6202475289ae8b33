// src/core/config_manager.rs
//! Layered configuration: CLI flag > environment > config.yaml > defaults

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use super::service_client::DEFAULT_SERVICE_URL;
use crate::utils::normalize_base_url;

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

const ENV_SELECTORS: &[&str] = &["COMPETITOR_ANALYSIS_ENV", "ENVIRONMENT"];
const SERVICE_URL_VAR: &str = "ANALYSIS_SERVICE_URL";
const TIMEOUT_VAR: &str = "ANALYSIS_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub service_url: String,
    /// Zero or unset disables the client-side timeout
    pub timeout_seconds: Option<u64>,
}

impl ServiceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: Option<FileSection>,
    #[serde(default)]
    production: Option<FileSection>,
}

#[derive(Debug, Default, Deserialize)]
struct FileSection {
    service_url: Option<String>,
    timeout_seconds: Option<u64>,
}

impl ConfigManager {
    /// Load from the process environment
    pub fn load(config_path: Option<&Path>, service_url: Option<&str>) -> Result<Self> {
        Self::load_with(config_path, service_url, |key| std::env::var(key).ok())
    }

    /// Load with an explicit variable lookup so callers control the environment
    pub fn load_with<F>(
        config_path: Option<&Path>,
        service_url: Option<&str>,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = ENV_SELECTORS
            .iter()
            .find_map(|&key| lookup(key))
            .unwrap_or_else(|| "local".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut service = ServiceConfig::default();

        if let Some(section) = Self::load_file(config_path, &environment)? {
            if let Some(url) = section.service_url {
                service.service_url = url;
            }
            if section.timeout_seconds.is_some() {
                service.timeout_seconds = section.timeout_seconds;
            }
        }

        if let Some(url) = lookup(SERVICE_URL_VAR).filter(|u| !u.trim().is_empty()) {
            service.service_url = url;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw.trim().parse::<u64>().with_context(|| {
                format!("{} must be a number of seconds, got {:?}", TIMEOUT_VAR, raw)
            })?;
            service.timeout_seconds = Some(secs);
        }

        if let Some(url) = service_url {
            service.service_url = url.to_string();
        }

        service.service_url = normalize_base_url(&service.service_url);
        if service.service_url.is_empty() {
            anyhow::bail!("Analysis service URL must not be empty");
        }

        info!("Analysis service: {}", service.service_url);
        Ok(Self {
            environment,
            service,
        })
    }

    /// An explicit path must exist; the default `config.yaml` is optional
    fn load_file(config_path: Option<&Path>, environment: &str) -> Result<Option<FileSection>> {
        let (path, required) = match config_path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(match environment {
            "production" => file.production,
            _ => file.local,
        })
    }
}
