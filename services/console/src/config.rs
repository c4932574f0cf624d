use rover_core::coordinate::Coordinate;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub planet_name: String,
    pub planet_width: i32,
    pub planet_height: i32,
    pub obstacles: Vec<Coordinate>,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let planet_name = std::env::var("PLANET_NAME").unwrap_or_else(|_| "Mars".to_string());
        let planet_width = dimension_from_env("PLANET_WIDTH")?;
        let planet_height = dimension_from_env("PLANET_HEIGHT")?;

        let obstacles = match std::env::var("PLANET_OBSTACLES") {
            Ok(raw) => parse_obstacles(&raw)
                .map_err(|e| ConfigError::InvalidValue("PLANET_OBSTACLES".to_string(), e))?,
            Err(_) => Vec::new(),
        };

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            planet_name,
            planet_width,
            planet_height,
            obstacles,
            log_level,
        })
    }
}

fn dimension_from_env(var: &str) -> Result<i32, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| "10".to_string());
    match raw.trim().parse::<i32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidValue(
            var.to_string(),
            format!("'{}' is not a positive integer", raw),
        )),
    }
}

/// Parses a comma-separated list of `x:y` pairs. Blank entries are skipped.
fn parse_obstacles(raw: &str) -> Result<Vec<Coordinate>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<Coordinate, String> {
            let (x, y) = entry
                .split_once(':')
                .ok_or_else(|| format!("'{}' is not an x:y pair", entry))?;
            let x = x
                .trim()
                .parse::<i32>()
                .map_err(|_| format!("'{}' has an invalid x", entry))?;
            let y = y
                .trim()
                .parse::<i32>()
                .map_err(|_| format!("'{}' has an invalid y", entry))?;
            Ok(Coordinate::new(x, y))
        })
        .collect()
}
