use std::env;
use std::str::FromStr;

use rocket::config::{
    Config as RocketConfig, ConfigError, Environment, LoggingLevel,
};

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub database_max_pool_size: u32,
    pub env_name: &'static str,
    pub server_address: String,
    pub server_port: u16,
    pub strict_attendance_date: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            database_url: "".to_string(),
            database_max_pool_size: 4,
            env_name: &"undefined",
            server_address: "127.0.0.1".to_string(),
            server_port: 3000,
            strict_attendance_date: false,
        }
    }
}

fn var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|_| format!("{} is not set", key))
}

fn var_or<T: FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(v) => {
            v.parse::<T>()
                .map_err(|_| format!("{} is invalid: '{}'", key, v))
        },
        Err(_) => Ok(default),
    }
}

fn flag(key: &str) -> bool {
    env::var(key).unwrap_or_else(|_| "false".to_string()) == "true"
}

/// Base URL of the API server the admin view reads from (`API_URL`).
pub fn api_url() -> String {
    env::var("API_URL").unwrap_or_else(|_| Config::API_URL.to_string())
}

impl Config {
    pub const API_URL: &'static str = "http://localhost:3000";

    pub const TESTING_DATABASE_URL: &'static str =
        "postgresql://postgres@localhost:5432/event_registration_test";

    pub fn from(config_name: &str) -> Result<Config, String> {
        match config_name {
            "production" => Config::production_config(),
            "testing" => Config::testing_config(),
            "development" => Config::development_config(),
            _ => Err(format!("Invalid config_name: '{}'", &config_name)),
        }
    }

    /// Builds the configuration for the underlying Rocket instance.
    pub fn rocket_config(&self) -> Result<RocketConfig, ConfigError> {
        let (environment, log_level) = match self.env_name {
            "production" => (Environment::Production, LoggingLevel::Critical),
            "testing" => (Environment::Staging, LoggingLevel::Off),
            _ => (Environment::Development, LoggingLevel::Normal),
        };

        RocketConfig::build(environment)
            .address(self.server_address.as_str())
            .port(self.server_port)
            .log_level(log_level)
            .finalize()
    }

    fn production_config() -> Result<Config, String> {
        Ok(Config {
            database_url: var("DATABASE_URL")?,
            database_max_pool_size: var_or("DATABASE_MAX_POOL_SIZE", 12)?,
            env_name: &"production",
            server_address: var_or("HOST", "0.0.0.0".to_string())?,
            server_port: var_or("PORT", 3000)?,
            strict_attendance_date: flag("STRICT_ATTENDANCE_DATE"),
        })
    }

    // NOTE:
    // database_max_pool_size must be >= 2 for integration tests, because the
    // pool is shared between the server and the test itself.
    fn testing_config() -> Result<Config, String> {
        Ok(Config {
            database_url: var_or(
                "TEST_DATABASE_URL",
                Self::TESTING_DATABASE_URL.to_string(),
            )?,
            database_max_pool_size: var_or("TEST_DATABASE_MAX_POOL_SIZE", 2)?,
            env_name: &"testing",
            server_address: var_or("TEST_HOST", "127.0.0.1".to_string())?,
            server_port: var_or("TEST_PORT", 3000)?,
            strict_attendance_date: flag("TEST_STRICT_ATTENDANCE_DATE"),
        })
    }

    fn development_config() -> Result<Config, String> {
        Ok(Config {
            database_url: var("DATABASE_URL")?,
            database_max_pool_size: var_or("DATABASE_MAX_POOL_SIZE", 4)?,
            env_name: &"development",
            server_address: var_or("HOST", "127.0.0.1".to_string())?,
            server_port: var_or("PORT", 3000)?,
            strict_attendance_date: flag("STRICT_ATTENDANCE_DATE"),
        })
    }
}
