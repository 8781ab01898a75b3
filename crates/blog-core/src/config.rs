//! Configuration management for blogline

use crate::error::{BlogError, Result};
use crate::event::DispatchPolicy;
use crate::pagination::{Paginator, PAGE_SIZE};
use crate::post::validator::{MAX_COMMENT_LENGTH, MIN_COMMENT_LENGTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Blog identity
    pub blog: BlogConfig,
    /// Listing settings
    pub pagination: PaginationConfig,
    /// Comment settings
    pub comments: CommentConfig,
    /// Notification settings
    pub notification: NotificationConfig,
}

impl Config {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BlogError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load from a TOML file, falling back to defaults when it is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(BlogError::FileNotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Write as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        self.pagination.paginator()?;
        if self.comments.max_length < MIN_COMMENT_LENGTH {
            return Err(BlogError::Config(format!(
                "comments.max_length must be at least {}",
                MIN_COMMENT_LENGTH
            )));
        }
        Ok(())
    }
}

/// Blog identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Blog title shown in listings and feeds
    pub title: String,
    /// Feed description
    pub description: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Blogline".to_string(),
            description: "Latest posts".to_string(),
        }
    }
}

/// Listing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Items per page for listings and feeds
    pub page_size: usize,
    /// Maximum number of search results
    pub search_limit: usize,
}

impl PaginationConfig {
    /// Build the paginator for this page size
    pub fn paginator(&self) -> Result<Paginator> {
        Paginator::with_page_size(self.page_size)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            search_limit: 10,
        }
    }
}

/// Comment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentConfig {
    /// Maximum comment length in characters
    pub max_length: usize,
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            max_length: MAX_COMMENT_LENGTH,
        }
    }
}

/// Notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Mail post authors about new comments
    pub enabled: bool,
    /// Sender address
    pub sender: String,
    /// Public URL used in links
    pub base_url: String,
    /// Behaviour when a comment-created handler fails
    pub on_handler_error: DispatchPolicy,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sender: "noreply@localhost".to_string(),
            base_url: "http://localhost:8000".to_string(),
            on_handler_error: DispatchPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.pagination.page_size, PAGE_SIZE);
        assert!(config.notification.enabled);
        assert_eq!(config.notification.on_handler_error, DispatchPolicy::StopOnError);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[pagination]"));
        assert!(toml.contains("[notification]"));
        assert!(toml.contains("on_handler_error = \"stop_on_error\""));

        let config2: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.pagination.page_size, config2.pagination.page_size);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[pagination]\npage_size = 5\n").unwrap();
        assert_eq!(config.pagination.page_size, 5);
        assert_eq!(config.pagination.search_limit, 10);
        assert_eq!(config.blog.title, "Blogline");
    }

    #[test]
    fn test_zero_page_size_invalid() {
        let config: Config = toml::from_str("[pagination]\npage_size = 0\n").unwrap();
        assert!(matches!(config.validate(), Err(BlogError::Config(_))));
    }

    #[test]
    fn test_comment_max_length_below_minimum_invalid() {
        for max_length in [0, MIN_COMMENT_LENGTH - 1] {
            let config = Config {
                comments: CommentConfig { max_length },
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(BlogError::Config(_))));
        }

        let config = Config {
            comments: CommentConfig {
                max_length: MIN_COMMENT_LENGTH,
            },
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.notification.on_handler_error = DispatchPolicy::Isolate;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.notification.on_handler_error, DispatchPolicy::Isolate);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");

        assert!(matches!(Config::load(&path), Err(BlogError::FileNotFound(_))));
        assert_eq!(
            Config::load_or_default(&path).unwrap().pagination.page_size,
            PAGE_SIZE
        );
    }
}
