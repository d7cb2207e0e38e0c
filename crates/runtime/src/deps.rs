//! Dependency injection traits for testability
//!
//! This module provides trait abstractions for all external dependencies,
//! allowing for easy mocking and testing.

use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;

/// File system operations
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read a file to string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replace a file's contents atomically.
    ///
    /// The content is written to a temporary file in the same directory and
    /// renamed over the target, so readers never observe a half-written file.
    fn write_atomic(&self, path: &Path, content: &str) -> Result<()>;

    /// Append to a file, creating it if it does not exist
    fn append(&self, path: &Path, content: &str) -> Result<()>;
}

/// Command execution operations
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Check if a command exists in PATH
    async fn check_command_exists(&self, command: &str) -> Result<()>;

    /// Execute a command with arguments
    async fn execute(&self, command: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Output from command execution
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Whether the command exited successfully
    pub success: bool,
    /// Standard output from the command
    pub stdout: Vec<u8>,
    /// Standard error from the command
    pub stderr: Vec<u8>,
}

/// Process environment operations
pub trait Environment: Send + Sync {
    /// The user's login shell, from `$SHELL`
    fn shell(&self) -> Option<String>;

    /// The user's home directory
    fn home_dir(&self) -> Option<PathBuf>;
}

/// User interface operations
pub trait UserInterface: Send + Sync {
    /// Print a message
    fn print(&self, message: &str);

    /// Print a styled message
    fn print_styled(&self, message: &str, style: MessageStyle);

    /// Check if running in interactive mode
    fn is_interactive(&self) -> bool;

    /// Prompt for selection
    fn prompt_select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Prompt for a yes/no confirmation
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Message styling options
#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    /// Bold text style
    Bold,
    /// Cyan colored text
    Cyan,
    /// Green colored text
    Green,
    /// Red colored text
    Red,
    /// Yellow colored text
    Yellow,
    /// Warning style (typically yellow)
    Warning,
    /// Error style (typically red)
    Error,
    /// Success style (typically green)
    Success,
}

// Production implementations

/// Production file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        use std::io::Write;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
            anyhow::anyhow!("Failed to create temporary file in {}: {}", dir.display(), e)
        })?;
        temp.write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))?;
        temp.persist(path)
            .map_err(|e| anyhow::anyhow!("Failed to replace file {}: {}", path.display(), e))?;
        Ok(())
    }

    fn append(&self, path: &Path, content: &str) -> Result<()> {
        use std::io::Write;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                anyhow::anyhow!("Failed to open file {} for append: {}", path.display(), e)
            })?;
        file.write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to append to file {}: {}", path.display(), e))
    }
}

/// Production command executor implementation
pub struct RealCommandExecutor;

#[async_trait]
impl CommandExecutor for RealCommandExecutor {
    async fn check_command_exists(&self, command: &str) -> Result<()> {
        which::which(command)
            .map(|_| ())
            .map_err(|_| anyhow::anyhow!("{} not found in PATH", command))
    }

    async fn execute(&self, command: &str, args: &[&str]) -> Result<CommandOutput> {
        let output = tokio::process::Command::new(command)
            .args(args)
            .output()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to execute {}: {}", command, e))?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Production environment implementation
pub struct RealEnvironment;

impl Environment for RealEnvironment {
    fn shell(&self) -> Option<String> {
        std::env::var("SHELL").ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile");
        let fs = RealFileSystem;

        assert!(!fs.exists(&path));
        fs.append(&path, "export FOO=bar\n").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "export FOO=bar\n");
    }

    #[test]
    fn append_preserves_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile");
        let fs = RealFileSystem;

        fs.append(&path, "first\n").unwrap();
        fs.append(&path, "second\n").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn write_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile");
        let fs = RealFileSystem;

        fs.append(&path, "old content\n").unwrap();
        fs.write_atomic(&path, "new content\n").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "new content\n");
    }

    #[test]
    fn write_atomic_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile");
        let fs = RealFileSystem;

        fs.write_atomic(&path, "content\n").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "content\n");
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = RealFileSystem;

        let err = fs.read_to_string(&dir.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
