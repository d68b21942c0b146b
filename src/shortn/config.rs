use crate::error::{Result, ShortnError};
use crate::registry::DEFAULT_SERVICE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

/// Per-service connection settings as written in the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Configuration for shortn, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortnConfig {
    /// Service used to shorten URLs (e.g. "tinyurl", "bitly")
    #[serde(default = "default_main_service")]
    pub main_service: String,

    /// Record every successful shortening in history
    #[serde(default = "default_enable_history")]
    pub enable_history: bool,

    /// Global HTTP timeout in seconds. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub services: BTreeMap<String, ServiceSettings>,
}

fn default_main_service() -> String {
    DEFAULT_SERVICE.to_string()
}

fn default_enable_history() -> bool {
    true
}

impl Default for ShortnConfig {
    fn default() -> Self {
        Self {
            main_service: default_main_service(),
            enable_history: default_enable_history(),
            timeout_secs: None,
            services: BTreeMap::new(),
        }
    }
}

impl ShortnConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShortnError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| ShortnError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShortnError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(ShortnError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(ShortnError::Io)?;
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn service(&self, service_id: &str) -> ServiceSettings {
        self.services.get(service_id).cloned().unwrap_or_default()
    }

    /// Every key/value pair in the dotted form accepted by [`ShortnConfig::set`].
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut out = vec![
            ("main-service".to_string(), self.main_service.clone()),
            ("enable-history".to_string(), self.enable_history.to_string()),
            (
                "timeout".to_string(),
                self.timeout_secs
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
        ];
        for (id, settings) in &self.services {
            if let Some(url) = &settings.api_url {
                out.push((format!("{}.api-url", id), url.clone()));
            }
            if let Some(key) = &settings.api_key {
                out.push((format!("{}.api-key", id), key.clone()));
            }
        }
        out
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Set one key. Service keys are `<service>.api-url` / `<service>.api-key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "main-service" => self.main_service = value.to_string(),
            "enable-history" => {
                self.enable_history = parse_bool(value).ok_or_else(|| {
                    ShortnError::Config(format!("enable-history expects yes/no, got `{}`", value))
                })?
            }
            "timeout" => {
                self.timeout_secs = match value {
                    "none" | "0" => None,
                    v => Some(v.parse().map_err(|_| {
                        ShortnError::Config(format!("timeout expects seconds, got `{}`", v))
                    })?),
                }
            }
            other => {
                let unknown = || ShortnError::Config(format!("Unknown config key: {}", other));
                let (service, field) = other.split_once('.').ok_or_else(unknown)?;
                if field != "api-url" && field != "api-key" {
                    return Err(unknown());
                }

                let settings = self.services.entry(service.to_string()).or_default();
                let value = Some(value.to_string()).filter(|v| !v.is_empty());
                if field == "api-url" {
                    settings.api_url = value;
                } else {
                    settings.api_key = value;
                }
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "true" | "on" | "1" => Some(true),
        "no" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
