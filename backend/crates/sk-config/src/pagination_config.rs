use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const DEFAULT_MAX_PAGE_LIMIT: u32 = 100;

/// Page sizes for list endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_LIMIT,
            max_limit: DEFAULT_MAX_PAGE_LIMIT,
        }
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_limit == 0 {
            return Err(ConfigError::config("pagination.max_limit must be at least 1"));
        }

        if self.default_limit == 0 || self.default_limit > self.max_limit {
            return Err(ConfigError::config(format!(
                "pagination.default_limit must be 1-{}, got {}",
                self.max_limit, self.default_limit
            )));
        }

        Ok(())
    }
}
