// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    // Generate Rust code with the compiled-in values
    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const EVENT_POLL_MS: u64 = {event_poll_ms};

pub const DEVICE_URL: &str = "{device_url}";
pub const DEFAULT_LIST: &str = "{default_list}";

pub const ALLOW_EMPTY_SAVE: bool = {allow_empty_save};
"#,
        mouse_enabled = config.mouse_enabled,
        event_poll_ms = config.event_poll_ms,
        device_url = config.device_url,
        default_list = config.default_list,
        allow_empty_save = config.allow_empty_save,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    mouse_enabled: bool,
    event_poll_ms: u64,
    device_url: String,
    default_list: String,
    allow_empty_save: bool,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            event_poll_ms: 50,
            device_url: "http://192.168.4.1".to_string(),
            default_list: "stations".to_string(),
            allow_empty_save: false,
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut section = "";

    for line in content.lines() {
        let trimmed = line.trim();

        // Track which section we're in
        if trimmed.starts_with("ui:") {
            section = "ui";
            continue;
        } else if trimmed.starts_with("device:") {
            section = "device";
            continue;
        } else if trimmed.starts_with("policy:") {
            section = "policy";
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            match section {
                "ui" => match key {
                    "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                    "event_poll_ms" => config.event_poll_ms = value.parse().unwrap_or(50),
                    _ => {}
                },
                "device" => match key {
                    "base_url" => config.device_url = value.to_string(),
                    "default_list" => config.default_list = value.to_string(),
                    _ => {}
                },
                "policy" => match key {
                    "allow_empty_save" => config.allow_empty_save = parse_bool(value),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value.trim_matches('"')))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}
