//! File system storage for posts and users

use blog_core::error::{BlogError, Result};
use blog_core::post::Post;
use blog_core::storage::{BlogStorage, RecordFile};
use blog_core::types::{PostId, Username};
use blog_core::user::User;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File system based blog storage
///
/// Layout: `<base>/posts/<id>.json` and `<base>/users/<username>.json`.
pub struct FileSystemStorage {
    /// Base directory for storage
    base_dir: PathBuf,
    /// Posts subdirectory
    posts_dir: PathBuf,
    /// Users subdirectory
    users_dir: PathBuf,
}

impl FileSystemStorage {
    /// Create a new file system storage
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let posts_dir = base_dir.join("posts");
        let users_dir = base_dir.join("users");

        let storage = Self {
            base_dir,
            posts_dir,
            users_dir,
        };

        storage.ensure_dirs()?;
        Ok(storage)
    }

    /// Platform data directory, falling back to `~/.blogline`
    pub fn default_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "blogline", "blogline")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".blogline")
            })
    }

    /// Ensure required directories exist
    fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.posts_dir, &self.users_dir] {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    BlogError::Io(std::io::Error::new(
                        e.kind(),
                        format!("Failed to create directory {:?}: {}", dir, e),
                    ))
                })?;
                debug!("Created storage directory: {:?}", dir);
            }
        }
        Ok(())
    }

    /// Get the path for a post file
    fn post_path(&self, id: &PostId) -> PathBuf {
        self.posts_dir.join(format!("{}.json", id))
    }

    /// Get the path for a user file
    fn user_path(&self, username: &Username) -> PathBuf {
        self.users_dir.join(format!("{}.json", username))
    }

    /// Write a record atomically (write to temp, then rename)
    fn atomic_write<T: Serialize>(&self, final_path: &Path, record: &T) -> Result<()> {
        let file_name = final_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("record.json");
        let temp_path = final_path.with_file_name(format!(".{}.tmp", file_name));

        let temp_file = fs::File::create(&temp_path).map_err(|e| {
            BlogError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, &RecordFile::new(record))?;
        writer.flush()?;

        // Rename to final path (atomic on most filesystems)
        fs::rename(&temp_path, final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            BlogError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;

        debug!("Saved record to {:?}", final_path);
        Ok(())
    }

    /// Read and unwrap a record file; `not_found` builds the error for a missing file
    fn read_record<T: DeserializeOwned>(
        &self,
        path: &Path,
        not_found: impl FnOnce() -> BlogError,
    ) -> Result<T> {
        let file = fs::File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                not_found()
            } else {
                BlogError::Io(e)
            }
        })?;

        let reader = BufReader::new(file);
        let record: RecordFile<T> = serde_json::from_reader(reader)?;
        record.into_record()
    }

    /// Read every record file in a directory, skipping unreadable ones
    fn read_all<T: DeserializeOwned>(&self, dir: &Path) -> Result<Vec<T>> {
        let mut records = Vec::new();

        let entries = fs::read_dir(dir).map_err(|e| {
            BlogError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read directory {:?}: {}", dir, e),
            ))
        })?;

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();

            // Skip non-json files and temp files
            if !path.extension().map(|e| e == "json").unwrap_or(false) {
                continue;
            }
            if path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with('.'))
                .unwrap_or(false)
            {
                continue;
            }

            match self.read_record(&path, || BlogError::FileNotFound(path.clone())) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("Failed to read record file {:?}: {}", path, e);
                }
            }
        }

        Ok(records)
    }

    /// Get base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get posts directory
    pub fn posts_dir(&self) -> &PathBuf {
        &self.posts_dir
    }

    /// Get users directory
    pub fn users_dir(&self) -> &PathBuf {
        &self.users_dir
    }
}

impl BlogStorage for FileSystemStorage {
    fn save_post(&self, post: &Post) -> Result<()> {
        self.atomic_write(&self.post_path(&post.id), post)
    }

    fn load_post(&self, id: &PostId) -> Result<Post> {
        self.read_record(&self.post_path(id), || {
            BlogError::PostNotFound(id.to_string())
        })
    }

    fn list_posts(&self) -> Result<Vec<Post>> {
        self.read_all(&self.posts_dir)
    }

    fn delete_post(&self, id: &PostId) -> Result<()> {
        let path = self.post_path(id);

        if !path.exists() {
            return Err(BlogError::PostNotFound(id.to_string()));
        }

        fs::remove_file(&path).map_err(|e| {
            BlogError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to delete post file: {}", e),
            ))
        })?;

        debug!("Deleted post {} from {:?}", id, path);
        Ok(())
    }

    fn save_user(&self, user: &User) -> Result<()> {
        self.atomic_write(&self.user_path(&user.username), user)
    }

    fn load_user(&self, username: &Username) -> Result<User> {
        self.read_record(&self.user_path(username), || {
            BlogError::UserNotFound(username.to_string())
        })
    }

    fn list_users(&self) -> Result<Vec<User>> {
        self.read_all(&self.users_dir)
    }
}
