//! Claude Code CLI collaborator
//!
//! Detects whether the `claude` binary is installed and performs the
//! best-effort logout offered after the gateway key takes over
//! authentication.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use claude_gateway_runtime::deps::CommandExecutor;

/// Claude Code CLI operations
#[async_trait]
pub trait ClaudeCli: Send + Sync {
    /// Verify the `claude` binary is installed
    async fn ensure_installed(&self) -> Result<()>;

    /// Log out of Claude Code by running `claude /logout`
    async fn logout(&self) -> Result<()>;
}

/// Production implementation of `ClaudeCli` that shells out to `claude`
pub struct RealClaudeCli {
    command_executor: Arc<dyn CommandExecutor>,
}

impl RealClaudeCli {
    /// Create a new Claude CLI wrapper
    pub const fn new(command_executor: Arc<dyn CommandExecutor>) -> Self {
        Self { command_executor }
    }
}

#[async_trait]
impl ClaudeCli for RealClaudeCli {
    async fn ensure_installed(&self) -> Result<()> {
        if self
            .command_executor
            .check_command_exists("claude")
            .await
            .is_err()
        {
            anyhow::bail!(
                "Claude Code is not installed.\n\
                 \n\
                 Install it first:\n\
                 \n\
                     npm install -g @anthropic-ai/claude-code\n\
                 \n\
                 then run this tool again."
            );
        }
        Ok(())
    }

    async fn logout(&self) -> Result<()> {
        let output = self.command_executor.execute("claude", &["/logout"]).await?;
        if !output.success {
            anyhow::bail!(
                "claude /logout exited with an error: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}
