// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level configuration for station-manager
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// UI and input settings
    pub ui: UiSettings,

    /// Default device and list selection
    pub defaults: DefaultSettings,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Enable mouse support (selection, icon clicks, drag reorder)
    pub mouse_enabled: bool,

    /// Terminal event poll interval in milliseconds
    pub event_poll_ms: u64,
}

#[derive(Debug, Clone)]
pub struct DefaultSettings {
    /// Device base URL used when no config file names one
    pub device_url: String,

    /// List edited when none is named on the command line
    pub list: String,

    /// Allow saving an empty list back to the device
    pub allow_empty_save: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse_enabled: compiled::MOUSE_ENABLED,
            event_poll_ms: compiled::EVENT_POLL_MS,
        }
    }
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            device_url: compiled::DEVICE_URL.to_string(),
            list: compiled::DEFAULT_LIST.to_string(),
            allow_empty_save: compiled::ALLOW_EMPTY_SAVE,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            defaults: DefaultSettings::default(),
        }
    }
}
