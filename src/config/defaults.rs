//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::{api, map};

/// Default prediction backend base URL
pub const DEFAULT_BACKEND_URL: &str = api::DEFAULT_BACKEND_URL;

/// Default request timeout in seconds (0 disables the timeout)
pub const DEFAULT_TIMEOUT_SECS: u64 = 0;

/// Default map center latitude
pub const DEFAULT_CENTER_LAT: f64 = map::CENTER_LAT;

/// Default map center longitude
pub const DEFAULT_CENTER_LNG: f64 = map::CENTER_LNG;

/// Default map zoom level
pub const DEFAULT_ZOOM: u8 = map::ZOOM;

/// Default tile URL template
pub const DEFAULT_TILE_URL: &str = map::TILE_URL;

/// Default tile attribution
pub const DEFAULT_ATTRIBUTION: &str = map::ATTRIBUTION;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5173;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "hoa-explore";
