//! Test helper utilities and mock implementations for
//! claude-gateway-commands
//!
//! The mocks cover every dependency-injection trait a command consumes, so
//! command tests never touch the real filesystem, PATH, or a terminal.

use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use mockall::mock;

use claude_gateway_common::ClaudeCli;
use claude_gateway_runtime::deps::{CommandExecutor, CommandOutput, Environment, FileSystem};

/// Test implementation of the `UserInterface` trait that captures all output
/// and replays scripted prompt answers.
///
/// Re-exported from `claude_gateway_common` so command tests can drive
/// prompts without a real terminal.
pub use claude_gateway_common::ui::TestUserInterface;

mock! {
    pub FileSystemMock {}

    impl FileSystem for FileSystemMock {
        fn exists(&self, path: &Path) -> bool;
        fn read_to_string(&self, path: &Path) -> Result<String>;
        fn write_atomic(&self, path: &Path, content: &str) -> Result<()>;
        fn append(&self, path: &Path, content: &str) -> Result<()>;
    }
}

mock! {
    pub CommandExecutorMock {}

    #[async_trait]
    impl CommandExecutor for CommandExecutorMock {
        async fn check_command_exists(&self, command: &str) -> Result<()>;
        #[mockall::concretize]
        async fn execute(&self, command: &str, args: &[&str]) -> Result<CommandOutput>;
    }
}

mock! {
    pub EnvironmentMock {}

    impl Environment for EnvironmentMock {
        fn shell(&self) -> Option<String>;
        fn home_dir(&self) -> Option<PathBuf>;
    }
}

mock! {
    pub ClaudeCliMock {}

    #[async_trait]
    impl ClaudeCli for ClaudeCliMock {
        async fn ensure_installed(&self) -> Result<()>;
        async fn logout(&self) -> Result<()>;
    }
}
