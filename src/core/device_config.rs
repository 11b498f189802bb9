// Device Configuration
// Declares which device to talk to and which lists it exposes

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEVICE_CONFIG_ENV, DEVICE_CONFIG_NAME, STATIONS_LOAD_PATH, STATIONS_SAVE_PATH, WIFI_LOAD_PATH,
    WIFI_SAVE_PATH,
};
use crate::core::app_config::compiled;

/// Device-level configuration
/// Declares the device address and the editable lists it serves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Device connection settings
    #[serde(default)]
    pub device: DeviceSettings,

    /// Map of list name -> endpoint pair
    #[serde(default = "default_lists")]
    pub lists: HashMap<String, ListEndpoints>,

    /// Save policy settings
    #[serde(default)]
    pub policy: PolicySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSettings {
    /// Base URL of the device web server
    pub base_url: String,
}

/// Endpoint pair serving one editable list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEndpoints {
    /// GET path returning the full list as CRLF-delimited text
    pub load_path: String,

    /// POST path accepting the full list as CRLF-delimited text
    pub save_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicySettings {
    /// Allow POSTing an empty list to the device
    #[serde(default)]
    pub allow_empty_save: bool,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            base_url: compiled::DEVICE_URL.to_string(),
        }
    }
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            allow_empty_save: compiled::ALLOW_EMPTY_SAVE,
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            device: DeviceSettings::default(),
            lists: default_lists(),
            policy: PolicySettings::default(),
        }
    }
}

/// The two lists every webradio device firmware serves
fn default_lists() -> HashMap<String, ListEndpoints> {
    let mut lists = HashMap::new();
    lists.insert(
        "stations".to_string(),
        ListEndpoints {
            load_path: STATIONS_LOAD_PATH.to_string(),
            save_path: STATIONS_SAVE_PATH.to_string(),
        },
    );
    lists.insert(
        "wifi".to_string(),
        ListEndpoints {
            load_path: WIFI_LOAD_PATH.to_string(),
            save_path: WIFI_SAVE_PATH.to_string(),
        },
    );
    lists
}

impl DeviceConfig {
    /// Load device configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read device config: {}", path.display()))?;

        let config: DeviceConfig =
            serde_yaml::from_str(&content).context("Failed to parse device config YAML")?;

        Ok(config)
    }

    /// Locate the device config: explicit path, environment variable,
    /// then the working directory
    pub fn discover(explicit: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path);
        }

        if let Ok(path) = std::env::var(DEVICE_CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let local = PathBuf::from(DEVICE_CONFIG_NAME);
        if local.exists() {
            return Some(local);
        }

        None
    }

    /// Get the endpoint pair for a named list
    pub fn list(&self, name: &str) -> Option<&ListEndpoints> {
        self.lists.get(name)
    }

    /// All list names the device serves, sorted for stable display
    pub fn list_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.lists.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Save device configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize device config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write device config: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists_cover_both_firmware_pairs() {
        let config = DeviceConfig::default();
        let stations = config.list("stations").unwrap();
        assert_eq!(stations.load_path, "/get_webradio.cgi");
        assert_eq!(stations.save_path, "/post_webradio.cgi");

        let wifi = config.list("wifi").unwrap();
        assert_eq!(wifi.load_path, "/get_wifiap.cgi");
        assert_eq!(wifi.save_path, "/post_wifiap.cgi");
    }

    #[test]
    fn test_parse_partial_yaml_fills_defaults() {
        let yaml = "device:\n  base_url: \"http://radio.local\"\n";
        let config: DeviceConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.device.base_url, "http://radio.local");
        assert!(config.list("stations").is_some());
        assert!(!config.policy.allow_empty_save);
    }

    #[test]
    fn test_list_names_sorted() {
        let config = DeviceConfig::default();
        assert_eq!(config.list_names(), vec!["stations", "wifi"]);
    }
}
