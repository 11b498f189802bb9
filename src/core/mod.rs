// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app;
pub mod app_config;
pub mod device_config;
pub mod events;

pub use app::{App, EditIntent, Row, RowMode};
pub use app_config::AppConfig;
pub use device_config::{DeviceConfig, ListEndpoints};
pub use events::{AppEvent, EventHandler};
