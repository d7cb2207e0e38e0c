//! Gateway status command
//!
//! Reports the resolved profile path and whether a gateway block is present,
//! in human-readable or JSON form.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;

use claude_gateway_common::RealUserInterface;
use claude_gateway_runtime::deps::{
    Environment, FileSystem, RealEnvironment, RealFileSystem, UserInterface,
};

use crate::profile::{GatewayMode, MARKER_TAG, contains_gateway_block, locate_profile};

/// Status command arguments (matches CLI parser)
#[derive(Debug, Clone, Default)]
pub struct StatusArgs {
    /// Emit machine-readable JSON instead of prose
    pub json: bool,
}

/// Dependencies for the status command
pub struct StatusDependencies {
    /// User interface for output
    pub ui: Arc<dyn UserInterface>,
    /// File system operations
    pub file_system: Arc<dyn FileSystem>,
    /// Process environment (shell, home directory)
    pub environment: Arc<dyn Environment>,
}

#[derive(Debug, Serialize)]
struct StatusReport {
    profile: String,
    configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<&'static str>,
}

/// Which mode wrote the block currently in `content`, if any
fn detect_mode(content: &str) -> Option<GatewayMode> {
    let marker_line = content.lines().find(|line| line.contains(MARKER_TAG))?;
    if marker_line.contains("(apikey)") {
        Some(GatewayMode::ApiKey)
    } else if marker_line.contains("(max)") {
        Some(GatewayMode::Max)
    } else {
        None
    }
}

/// Execute the status command with injected dependencies
pub fn execute_with_deps(args: &StatusArgs, deps: &Arc<StatusDependencies>) -> Result<()> {
    let home = deps
        .environment
        .home_dir()
        .context("Could not determine the home directory")?;
    let shell = deps.environment.shell();
    let profile = locate_profile(shell.as_deref(), &home, deps.file_system.as_ref());

    let content = if deps.file_system.exists(&profile) {
        deps.file_system.read_to_string(&profile)?
    } else {
        String::new()
    };
    let configured = contains_gateway_block(&content);
    let mode = detect_mode(&content);

    if args.json {
        let report = StatusReport {
            profile: profile.display().to_string(),
            configured,
            mode: mode.map(GatewayMode::as_str),
        };
        deps.ui.print(&serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    deps.ui.print(&format!("Profile: {}", profile.display()));
    if configured {
        match mode {
            Some(mode) => deps
                .ui
                .print(&format!("Gateway: configured ({} mode)", mode.as_str())),
            None => deps.ui.print("Gateway: configured"),
        }
    } else {
        deps.ui.print("Gateway: not configured");
    }
    Ok(())
}

/// Execute the status command with default dependencies
#[allow(clippy::unused_async)]
pub async fn execute(args: StatusArgs) -> Result<()> {
    let deps = Arc::new(StatusDependencies {
        ui: Arc::new(RealUserInterface),
        file_system: Arc::new(RealFileSystem),
        environment: Arc::new(RealEnvironment),
    });

    execute_with_deps(&args, &deps)
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
