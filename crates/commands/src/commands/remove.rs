//! Gateway removal command
//!
//! The reverse of setup: deletes the marker-delimited gateway block from the
//! shell profile, leaving everything else untouched.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use claude_gateway_common::RealUserInterface;
use claude_gateway_runtime::deps::{
    Environment, FileSystem, MessageStyle, RealEnvironment, RealFileSystem, UserInterface,
};

use crate::profile::{contains_gateway_block, locate_profile, strip_gateway_blocks};

/// Remove command arguments (matches CLI parser)
#[derive(Debug, Clone, Default)]
pub struct RemoveArgs {
    /// Skip the confirmation prompt
    pub yes: bool,
}

/// Final outcome of a removal run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The gateway block was removed from the profile at this path
    Removed(PathBuf),
    /// The profile at this path holds no gateway block
    NotFound(PathBuf),
    /// The user declined; the profile at this path was not touched
    Skipped(PathBuf),
}

/// Dependencies for the remove command
pub struct RemoveDependencies {
    /// User interface for output and prompts
    pub ui: Arc<dyn UserInterface>,
    /// File system operations
    pub file_system: Arc<dyn FileSystem>,
    /// Process environment (shell, home directory)
    pub environment: Arc<dyn Environment>,
}

/// Execute the remove command with injected dependencies
pub fn execute_with_deps(args: &RemoveArgs, deps: &Arc<RemoveDependencies>) -> Result<RemoveOutcome> {
    let home = deps
        .environment
        .home_dir()
        .context("Could not determine the home directory")?;
    let shell = deps.environment.shell();
    let profile = locate_profile(shell.as_deref(), &home, deps.file_system.as_ref());

    if !deps.file_system.exists(&profile) {
        deps.ui.print(&format!(
            "No gateway configuration found in {}",
            profile.display()
        ));
        return Ok(RemoveOutcome::NotFound(profile));
    }

    let content = deps.file_system.read_to_string(&profile)?;
    if !contains_gateway_block(&content) {
        deps.ui.print(&format!(
            "No gateway configuration found in {}",
            profile.display()
        ));
        return Ok(RemoveOutcome::NotFound(profile));
    }

    if !args.yes
        && !deps.ui.prompt_confirm(
            &format!(
                "Remove the Vercel AI Gateway block from {}?",
                profile.display()
            ),
            true,
        )?
    {
        deps.ui.print("No changes made.");
        return Ok(RemoveOutcome::Skipped(profile));
    }

    deps.file_system
        .write_atomic(&profile, &strip_gateway_blocks(&content))?;
    deps.ui.print_styled(
        &format!(
            "✓ Gateway configuration removed from {}",
            profile.display()
        ),
        MessageStyle::Success,
    );
    Ok(RemoveOutcome::Removed(profile))
}

/// Execute the remove command with default dependencies
#[allow(clippy::unused_async)]
pub async fn execute(args: RemoveArgs) -> Result<RemoveOutcome> {
    let deps = Arc::new(RemoveDependencies {
        ui: Arc::new(RealUserInterface),
        file_system: Arc::new(RealFileSystem),
        environment: Arc::new(RealEnvironment),
    });

    execute_with_deps(&args, &deps)
}

#[cfg(test)]
#[path = "remove_tests.rs"]
mod tests;
