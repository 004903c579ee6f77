mod file;

pub use file::LocalFileSystem;

use async_trait::async_trait;
use std::path::Path;

/// Trait for the file access the generator depends on.
///
/// Implementations handle reading sources and persisting generated tests
/// (local disk, editor buffers, in-memory fixtures).
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Reads the full text of a file.
    async fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Whether a file exists at `path`.
    async fn exists(&self, path: &Path) -> bool;

    /// Writes `content` to `path`, creating parent directories and replacing prior content.
    async fn write(&self, path: &Path, content: &str) -> std::io::Result<()>;
}

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A message surfaced to the end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// The environment that invoked generation (editor, terminal).
#[async_trait]
pub trait Host: Send + Sync {
    /// Asks whether an existing test file may be overwritten.
    async fn confirm_overwrite(&self, path: &Path) -> bool;

    /// Shows a message to the user.
    fn notify(&self, notification: Notification);
}
