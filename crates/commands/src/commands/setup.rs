//! Gateway setup command
//!
//! Walks the user through routing Claude Code traffic via the Vercel AI
//! Gateway: resolves the authentication mode and secret source, renders the
//! export block, and reconciles it into the shell profile.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use claude_gateway_common::{ClaudeCli, RealClaudeCli, RealUserInterface};
use claude_gateway_runtime::deps::{
    CommandExecutor, Environment, FileSystem, MessageStyle, RealCommandExecutor, RealEnvironment,
    RealFileSystem, UserInterface,
};

use crate::profile::{
    ConfigBlock, GatewayMode, KEYCHAIN_SERVICE, ReconcileOutcome, SecretSource, apply_block,
    locate_profile,
};

/// Setup command arguments (matches CLI parser)
#[derive(Debug, Clone, Default)]
pub struct SetupArgs {
    /// Authentication mode; prompted for when unset
    pub mode: Option<GatewayMode>,
    /// Whether to reference the key from the OS keychain; prompted for when
    /// unset and the capability is available
    pub keychain: Option<bool>,
    /// Skip every confirmation prompt
    pub yes: bool,
    /// Whether to log out of Claude Code afterwards (apikey mode only);
    /// prompted for when unset
    pub logout: Option<bool>,
}

/// Final outcome of a setup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The gateway block was written to the profile at this path
    Applied(PathBuf),
    /// The user declined; the profile at this path was not touched
    Skipped(PathBuf),
}

/// Dependencies for the setup command
pub struct SetupDependencies {
    /// User interface for output and prompts
    pub ui: Arc<dyn UserInterface>,
    /// File system operations
    pub file_system: Arc<dyn FileSystem>,
    /// Command executor for capability probes
    pub command_executor: Arc<dyn CommandExecutor>,
    /// Process environment (shell, home directory)
    pub environment: Arc<dyn Environment>,
    /// Claude Code CLI collaborator
    pub claude_cli: Arc<dyn ClaudeCli>,
}

/// Execute the setup command with injected dependencies
pub async fn execute_with_deps(
    args: SetupArgs,
    deps: &Arc<SetupDependencies>,
) -> Result<SetupOutcome> {
    deps.ui.print_styled(
        "→ Configuring Claude Code for the Vercel AI Gateway",
        MessageStyle::Cyan,
    );
    deps.ui.print("");

    deps.claude_cli.ensure_installed().await?;

    let mode = resolve_mode(&args, deps)?;
    let source = resolve_secret_source(&args, deps).await?;
    let block = ConfigBlock::generate(mode, source);

    let home = deps
        .environment
        .home_dir()
        .context("Could not determine the home directory")?;
    let shell = deps.environment.shell();
    let profile = locate_profile(shell.as_deref(), &home, deps.file_system.as_ref());

    deps.ui
        .print("The following block will be added to your shell profile:");
    deps.ui.print(&block.render());

    if !args.yes
        && !deps
            .ui
            .prompt_confirm(&format!("Write this to {}?", profile.display()), true)?
    {
        deps.ui.print("No changes made.");
        return Ok(SetupOutcome::Skipped(profile));
    }

    let auto_confirm = args.yes;
    let outcome = apply_block(deps.file_system.as_ref(), &profile, &block, &|| {
        if auto_confirm {
            Ok(true)
        } else {
            deps.ui.prompt_confirm(
                "An existing Vercel AI Gateway block was found. Replace it?",
                true,
            )
        }
    })?;

    if outcome == ReconcileOutcome::Skipped {
        deps.ui
            .print("Keeping the existing configuration. No changes made.");
        return Ok(SetupOutcome::Skipped(profile));
    }

    deps.ui.print_styled(
        &format!("✓ Gateway configuration written to {}", profile.display()),
        MessageStyle::Success,
    );
    print_follow_up(source, &profile, deps);

    if mode == GatewayMode::ApiKey {
        offer_logout(&args, deps).await?;
    }

    Ok(SetupOutcome::Applied(profile))
}

fn resolve_mode(args: &SetupArgs, deps: &Arc<SetupDependencies>) -> Result<GatewayMode> {
    if let Some(mode) = args.mode {
        return Ok(mode);
    }
    if !deps.ui.is_interactive() {
        anyhow::bail!("No terminal available to ask for a mode; pass --mode apikey or --mode max");
    }
    let items = [
        "AI Gateway API key (ANTHROPIC_AUTH_TOKEN)",
        "Claude subscription (Max plan)",
    ];
    let selection = deps
        .ui
        .prompt_select("How do you authenticate to the AI Gateway?", &items, 0)?;
    Ok(if selection == 0 {
        GatewayMode::ApiKey
    } else {
        GatewayMode::Max
    })
}

async fn resolve_secret_source(
    args: &SetupArgs,
    deps: &Arc<SetupDependencies>,
) -> Result<SecretSource> {
    // Capability-gated, not OS-gated: anything with the `security` tool on
    // PATH can serve the deferred keychain lookup.
    let keychain_available = deps
        .command_executor
        .check_command_exists("security")
        .await
        .is_ok();

    match args.keychain {
        Some(true) => {
            if !keychain_available {
                anyhow::bail!(
                    "--keychain requires the `security` tool, which was not found on this system"
                );
            }
            Ok(SecretSource::Keychain)
        }
        Some(false) => Ok(SecretSource::Placeholder),
        None => {
            if keychain_available
                && !args.yes
                && deps.ui.is_interactive()
                && deps.ui.prompt_confirm(
                    "Read the API key from the macOS Keychain instead of storing a placeholder?",
                    false,
                )?
            {
                Ok(SecretSource::Keychain)
            } else {
                Ok(SecretSource::Placeholder)
            }
        }
    }
}

fn print_follow_up(source: SecretSource, profile: &Path, deps: &Arc<SetupDependencies>) {
    deps.ui.print("");
    match source {
        SecretSource::Placeholder => {
            deps.ui.print(&format!(
                "Edit {} and replace <YOUR_AI_GATEWAY_API_KEY> with your AI Gateway key.",
                profile.display()
            ));
        }
        SecretSource::Keychain => {
            deps.ui.print(
                "Store your AI Gateway key in the keychain (you will be prompted for the value):",
            );
            deps.ui.print(&format!(
                "    security add-generic-password -s \"{KEYCHAIN_SERVICE}\" -a \"$USER\" -w"
            ));
        }
    }
    deps.ui.print(&format!(
        "Then restart your shell or run `source {}`.",
        profile.display()
    ));
}

async fn offer_logout(args: &SetupArgs, deps: &Arc<SetupDependencies>) -> Result<()> {
    let wants_logout = match args.logout {
        Some(choice) => choice,
        None => {
            if args.yes || !deps.ui.is_interactive() {
                false
            } else {
                deps.ui.prompt_confirm(
                    "Log out of Claude Code now so the gateway key takes effect?",
                    false,
                )?
            }
        }
    };
    if !wants_logout {
        return Ok(());
    }

    // Best effort: the configuration is already written, so a failed logout
    // must not fail the setup.
    match deps.claude_cli.logout().await {
        Ok(()) => deps
            .ui
            .print_styled("✓ Logged out of Claude Code", MessageStyle::Success),
        Err(e) => deps.ui.print_styled(
            &format!("⚠ Could not log out of Claude Code: {e}. Continuing anyway."),
            MessageStyle::Warning,
        ),
    }
    Ok(())
}

/// Execute the setup command with default dependencies
pub async fn execute(args: SetupArgs) -> Result<SetupOutcome> {
    let command_executor: Arc<dyn CommandExecutor> = Arc::new(RealCommandExecutor);
    let deps = Arc::new(SetupDependencies {
        ui: Arc::new(RealUserInterface),
        file_system: Arc::new(RealFileSystem),
        command_executor: command_executor.clone(),
        environment: Arc::new(RealEnvironment),
        claude_cli: Arc::new(RealClaudeCli::new(command_executor)),
    });

    execute_with_deps(args, &deps).await
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod tests;
