// Application constants
// Endpoint paths come from the webradio firmware's CGI handler table

/// Line separator used by the device list format
pub const CRLF: &str = "\r\n";

/// Device config file looked up next to the working directory
pub const DEVICE_CONFIG_NAME: &str = "station-manager.yaml";

/// Environment variable overriding the device config location
pub const DEVICE_CONFIG_ENV: &str = "STATION_MANAGER_CONFIG";

/// Log file written by the tracing subscriber
pub const LOG_FILE_NAME: &str = "station-manager.log";

/// Environment variable controlling the log filter
pub const LOG_FILTER_ENV: &str = "STATION_MANAGER_LOG";

/// Station list endpoints
pub const STATIONS_LOAD_PATH: &str = "/get_webradio.cgi";
pub const STATIONS_SAVE_PATH: &str = "/post_webradio.cgi";

/// Wi-Fi access point list endpoints
pub const WIFI_LOAD_PATH: &str = "/get_wifiap.cgi";
pub const WIFI_SAVE_PATH: &str = "/post_wifiap.cgi";
