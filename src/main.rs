// Station Manager
// TUI application for editing the station list of a webradio device

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use station_manager::core::{App, AppConfig, DeviceConfig};
use station_manager::operations::DeviceClient;
use station_manager::ui::run_app;
use station_manager::{DEVICE_CONFIG_NAME, LOG_FILE_NAME, LOG_FILTER_ENV};

#[derive(Parser, Debug)]
#[command(
    name = "station-manager",
    version,
    about = "Edit the station list of a webradio device from the terminal"
)]
struct Args {
    /// Device config file (default: ./station-manager.yaml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Device base URL, overriding the config file
    #[arg(long, value_name = "URL")]
    device: Option<String>,

    /// List to edit: stations, wifi, or any list the config names
    #[arg(short, long, value_name = "NAME")]
    list: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let config = AppConfig::default();

    // Load device config, falling back to the built-in defaults
    let mut device_config = match DeviceConfig::discover(args.config.clone()) {
        Some(path) => DeviceConfig::load(&path)?,
        None => {
            info!("no {DEVICE_CONFIG_NAME} found, using built-in defaults");
            DeviceConfig::default()
        }
    };
    if let Some(device) = args.device {
        device_config.device.base_url = device;
    }

    let list_name = args.list.unwrap_or_else(|| config.defaults.list.clone());
    let endpoints = device_config.list(&list_name).cloned().ok_or_else(|| {
        anyhow!(
            "unknown list '{}'. Available lists: {}",
            list_name,
            device_config.list_names().join(", ")
        )
    })?;

    let client = DeviceClient::new(&device_config.device.base_url, endpoints)?;
    let mut app = App::new(config, device_config, list_name);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if app.config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &client);

    // Restore terminal
    disable_raw_mode()?;
    if app.config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Log to a file; the alternate screen owns stdout
fn init_tracing() -> Result<()> {
    let log_file = File::create(LOG_FILE_NAME)
        .with_context(|| format!("Failed to create {LOG_FILE_NAME}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!("station-manager starting");
    Ok(())
}
