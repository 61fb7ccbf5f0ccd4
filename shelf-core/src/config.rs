//! YAML configuration for list views and the console

use serde::{Deserialize, Serialize};
use shelf_common::DEFAULT_PAGE_SIZES;
use tracing::info;

use crate::error::ConfigError;

fn default_page_sizes() -> Vec<u32> {
    DEFAULT_PAGE_SIZES.to_vec()
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_placeholder_rows() -> usize {
    10
}

fn default_api_url() -> String {
    "/admin-api".to_string()
}

/// Settings shared by every list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Page sizes offered in the pager. The first one is the default.
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<u32>,
    /// Quiet period before a search keystroke is committed to the URL
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Skeleton rows rendered while the first page is loading
    #[serde(default = "default_placeholder_rows")]
    pub placeholder_rows: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_sizes: default_page_sizes(),
            search_debounce_ms: default_search_debounce_ms(),
            placeholder_rows: default_placeholder_rows(),
        }
    }
}

impl ListConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ListConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_sizes.is_empty() {
            return Err(ConfigError::Config("page_sizes must not be empty".into()));
        }
        if self.page_sizes.contains(&0) {
            return Err(ConfigError::Config("page_sizes must be positive".into()));
        }
        if self.page_sizes.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::Config(
                "page_sizes must be strictly increasing".into(),
            ));
        }
        if self.search_debounce_ms == 0 {
            return Err(ConfigError::Config(
                "search_debounce_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Page size used when the URL does not name one
    pub fn default_page_size(&self) -> u32 {
        self.page_sizes
            .first()
            .or_else(|| DEFAULT_PAGE_SIZES.first())
            .copied()
            .unwrap_or(10)
    }
}

/// Console configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfConfig {
    /// Admin API endpoint the list fetchers post to
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub list: ListConfig,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            list: ListConfig::default(),
        }
    }
}

impl ShelfConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ShelfConfig = serde_yaml::from_str(yaml)?;
        if config.api_url.trim().is_empty() {
            return Err(ConfigError::Config("api_url must not be empty".into()));
        }
        config.list.validate()?;
        info!(
            "Loaded console config: api_url={}, page_sizes={:?}",
            config.api_url, config.list.page_sizes
        );
        Ok(config)
    }
}
