//! Shared wiring for commands
//!
//! Loads the configuration, opens storage and assembles the services with
//! their event subscribers.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use blog_core::config::Config;
use blog_core::event::EventChannel;
use blog_core::notification::{CommentNotificationSubscriber, LogMailer, Mailer};
use blog_core::service::{AccountService, AdminService, BlogService};
use blog_core::storage::BlogStorage;
use blog_core::types::Username;
use blog_core::user::User;
use blog_storage::FileSystemStorage;

/// Directory created by `blog init`
pub const BLOG_DIR: &str = ".blog";

/// Resolved file locations
#[derive(Debug, Clone)]
pub struct Paths {
    pub config: PathBuf,
    pub data_dir: PathBuf,
}

impl Paths {
    /// Apply command-line overrides to the defaults.
    ///
    /// Inside a blog project (`local`), data lives in `.blog/data`; elsewhere
    /// it lives in the platform data directory.
    pub fn resolve(config: Option<PathBuf>, data_dir: Option<PathBuf>, local: bool) -> Self {
        let root = PathBuf::from(BLOG_DIR);
        let data_dir = data_dir.unwrap_or_else(|| {
            if local {
                root.join("data")
            } else {
                FileSystemStorage::default_dir()
            }
        });
        Self {
            config: config.unwrap_or_else(|| root.join("config.toml")),
            data_dir,
        }
    }
}

/// Whether the working directory holds a blog created by `blog init`
pub fn in_blog_project() -> bool {
    Path::new(BLOG_DIR).is_dir()
}

/// Loaded configuration and storage
pub struct App {
    pub config: Config,
    storage: Arc<dyn BlogStorage>,
}

impl App {
    /// Load configuration and open the data directory
    pub fn open(paths: &Paths) -> Result<Self> {
        let config = Config::load_or_default(&paths.config)
            .with_context(|| format!("Failed to load {}", paths.config.display()))?;
        let storage = open_storage(&paths.data_dir)?;
        debug!(
            config = %paths.config.display(),
            data_dir = %paths.data_dir.display(),
            "Opened blog"
        );
        Ok(Self {
            config,
            storage: Arc::new(storage),
        })
    }

    /// Build the event channel from the notification settings
    pub fn event_channel(&self, mailer: Arc<dyn Mailer>) -> EventChannel {
        let notification = &self.config.notification;
        let mut channel = EventChannel::with_policy(notification.on_handler_error);
        if notification.enabled {
            channel.subscribe(CommentNotificationSubscriber::new(
                self.storage.clone(),
                mailer,
                notification,
            ));
        }
        channel
    }

    /// Public blog service, mailing through the log
    pub fn blog(&self) -> Result<BlogService> {
        let events = self.event_channel(Arc::new(LogMailer));
        Ok(BlogService::from_config(
            self.storage.clone(),
            &self.config,
            events,
        )?)
    }

    /// Admin service
    pub fn admin(&self) -> AdminService {
        AdminService::new(self.storage.clone())
    }

    /// Account service
    pub fn accounts(&self) -> AccountService {
        AccountService::new(self.storage.clone())
    }

    /// Storage backend
    pub fn storage(&self) -> &dyn BlogStorage {
        self.storage.as_ref()
    }

    /// Look up the acting user
    pub fn user(&self, username: &str) -> Result<User> {
        let username = Username::new(username)?;
        self.storage
            .load_user(&username)
            .with_context(|| format!("Unknown user '{}'", username))
    }
}

/// Open file storage at `data_dir`
pub fn open_storage(data_dir: &Path) -> Result<FileSystemStorage> {
    FileSystemStorage::new(data_dir)
        .with_context(|| format!("Failed to open data directory {}", data_dir.display()))
}
