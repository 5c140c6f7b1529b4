//! Build-time Configuration
//!
//! Values are baked in from environment variables when the bundle is built;
//! unset or invalid values fall back to defaults.

use std::str::FromStr;

use log::{info, warn, Level, SetLoggerError};

const DEFAULT_API_BASE: &str = "";
const DEFAULT_MAP_LINK_BASE: &str = "https://map.kakao.com/link/map/";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prefix for backend API paths (empty = same origin)
    pub api_base: String,
    /// External map link prefix; place names are appended comma-separated
    pub map_link_base: String,
    pub log_level: Level,
}

impl Config {
    pub fn load() -> Self {
        Self::from_values(
            option_env!("OJAKGYO_API_BASE"),
            option_env!("OJAKGYO_MAP_LINK_BASE"),
            option_env!("OJAKGYO_LOG_LEVEL"),
        )
    }

    fn from_values(api_base: Option<&str>, map_link_base: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base: try_load("OJAKGYO_API_BASE", api_base, DEFAULT_API_BASE),
            map_link_base: try_load("OJAKGYO_MAP_LINK_BASE", map_link_base, DEFAULT_MAP_LINK_BASE),
            log_level: try_load("OJAKGYO_LOG_LEVEL", log_level, DEFAULT_LOG_LEVEL),
        }
    }

    /// Join an absolute API path onto the configured base
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

fn try_load<T: FromStr>(key: &str, value: Option<&str>, default: &str) -> T
where
    T::Err: std::fmt::Display,
{
    let raw = value.unwrap_or_else(|| {
        info!("{key} not set, using default: {default:?}");
        default
    });
    match raw.parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, using default");
            default.parse().unwrap_or_else(|_| unreachable!("default for {key} must parse"))
        }
    }
}

thread_local! {
    static CONFIG: Config = Config::load();
}

/// Resolved configuration for this page load
pub fn config() -> Config {
    CONFIG.with(Clone::clone)
}

/// Install the logger wide open so loading the configuration is logged,
/// then narrow it to the configured level
pub fn init_logging<F>(install: F) -> Config
where
    F: FnOnce(Level) -> Result<(), SetLoggerError>,
{
    let installed = install(Level::Trace);
    let config = config();
    if installed.is_ok() {
        log::set_max_level(config.log_level.to_level_filter());
    }
    config
}
