//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the KitchenHub API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `KITCHEN_TIMEZONE`: IANA zone that dates and opening hours are read in (default: "UTC")
//! - `BOOKING_SUBMIT_DELAY_MS`: Simulated processing delay on booking submission (default: 1500)
//! - `DEFAULT_USER_ID`: User that bookings are made for (default: "user123")
//! - `SLOT_SEED`: Seed for reproducible slot availability (optional)

use std::{env, time::Duration};

use chrono_tz::Tz;
use eyre::{eyre, Result, WrapErr};
use tracing::Level;

/// Configuration for the KitchenHub API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use kitchenhub_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Zone in which calendar dates and slot hours are interpreted
    pub timezone: Tz,

    /// Pause before a submitted booking is stored
    pub submit_delay: Duration,

    /// Owner of every booking made through this server
    pub default_user_id: String,

    /// Seed for the slot availability generator
    pub slot_seed: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            timezone: Tz::UTC,
            submit_delay: Duration::from_millis(1500),
            default_user_id: "user123".to_string(),
            slot_seed: None,
        }
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - The KITCHEN_TIMEZONE value is not a known IANA time zone
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        // Network settings
        let host = env::var("API_HOST").unwrap_or(defaults.host);
        let port = match env::var("API_PORT") {
            Ok(port) => port.parse().wrap_err("Invalid API_PORT value")?,
            Err(_) => defaults.port,
        };

        // Logging settings
        let log_level = env::var("LOG_LEVEL")
            .map(|level| parse_log_level(&level))
            .unwrap_or(defaults.log_level);

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.request_timeout);

        // Booking settings
        let timezone = match env::var("KITCHEN_TIMEZONE") {
            Ok(name) => name
                .parse::<Tz>()
                .map_err(|e| eyre!("Invalid KITCHEN_TIMEZONE value {}: {}", name, e))?,
            Err(_) => defaults.timezone,
        };

        let submit_delay = env::var("BOOKING_SUBMIT_DELAY_MS")
            .ok()
            .and_then(|value| value.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.submit_delay);

        let default_user_id = env::var("DEFAULT_USER_ID").unwrap_or(defaults.default_user_id);

        let slot_seed = env::var("SLOT_SEED")
            .ok()
            .and_then(|value| value.parse().ok());

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            timezone,
            submit_delay,
            default_user_id,
            slot_seed,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
