use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, LoggingConfig, PaginationConfig, RateLimitConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
    pub pagination: PaginationConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. `.env` in the working directory, if present
    /// 2. SK_CONFIG_DIR env var, else ./.sk/ (created if missing)
    /// 3. config.toml in that directory, else defaults
    /// 4. SK_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SK_CONFIG_DIR env var > ./.sk/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.rate_limit.validate()?;
        self.pagination.validate()?;

        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log file, when file logging is enabled.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };

        Ok(Some(
            Self::config_dir()?.join(&self.logging.dir).join(file),
        ))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: jwt_secret {}, token ttl {}s",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.token_ttl_secs
        );
        info!(
            "  rate_limit: {} login attempts/{}s, sweep every {}s",
            self.rate_limit.max_attempts,
            self.rate_limit.window_secs,
            self.rate_limit.sweep_interval_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  pagination: default {}, max {}",
            self.pagination.default_limit, self.pagination.max_limit
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SK_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SK_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("SK_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "SK_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("SK_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("SK_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);

        // Rate limit
        Self::apply_env_parse(
            "SK_RATE_LIMIT_MAX_ATTEMPTS",
            &mut self.rate_limit.max_attempts,
        );
        Self::apply_env_parse("SK_RATE_LIMIT_WINDOW_SECS", &mut self.rate_limit.window_secs);
        Self::apply_env_parse(
            "SK_RATE_LIMIT_SWEEP_INTERVAL_SECS",
            &mut self.rate_limit.sweep_interval_secs,
        );

        // Logging
        Self::apply_env_parse("SK_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SK_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SK_LOG_FILE", &mut self.logging.file);

        // Pagination
        Self::apply_env_parse(
            "SK_PAGINATION_DEFAULT_LIMIT",
            &mut self.pagination.default_limit,
        );
        Self::apply_env_parse("SK_PAGINATION_MAX_LIMIT", &mut self.pagination.max_limit);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// An empty value clears the setting.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = if val.is_empty() { None } else { Some(val) };
        }
    }
}
