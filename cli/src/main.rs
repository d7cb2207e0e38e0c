//! claude-gateway - Route Claude Code through the Vercel AI Gateway

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use claude_gateway_commands::profile::GatewayMode;
use claude_gateway_commands::{remove, setup, status};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the gateway configuration into your shell profile
    Setup(SetupArgs),
    /// Remove the gateway configuration from your shell profile
    Remove(RemoveArgs),
    /// Show whether the gateway configuration is present
    Status(StatusArgs),
}

/// How Claude Code authenticates to the gateway
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Authenticate with an AI Gateway API key
    Apikey,
    /// Proxy a Claude subscription (Max plan)
    Max,
}

impl From<Mode> for GatewayMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Apikey => Self::ApiKey,
            Mode::Max => Self::Max,
        }
    }
}

// Simple command wrappers - just forward arguments

#[derive(Debug, Args)]
struct SetupArgs {
    /// Authentication mode (prompted for when omitted)
    #[arg(long, value_enum)]
    mode: Option<Mode>,
    /// Reference the API key from the OS keychain
    #[arg(long)]
    keychain: bool,
    /// Store a placeholder instead of a keychain reference
    #[arg(long, conflicts_with = "keychain")]
    no_keychain: bool,
    /// Answer yes to every prompt
    #[arg(short, long)]
    yes: bool,
    /// Log out of Claude Code after configuring (apikey mode)
    #[arg(long)]
    logout: bool,
    /// Skip the Claude Code logout
    #[arg(long, conflicts_with = "logout")]
    no_logout: bool,
}

impl From<SetupArgs> for setup::SetupArgs {
    fn from(args: SetupArgs) -> Self {
        Self {
            mode: args.mode.map(Into::into),
            keychain: tri_state(args.keychain, args.no_keychain),
            yes: args.yes,
            logout: tri_state(args.logout, args.no_logout),
        }
    }
}

#[derive(Debug, Args)]
struct RemoveArgs {
    /// Answer yes to every prompt
    #[arg(short, long)]
    yes: bool,
}

impl From<RemoveArgs> for remove::RemoveArgs {
    fn from(args: RemoveArgs) -> Self {
        Self { yes: args.yes }
    }
}

#[derive(Debug, Args)]
struct StatusArgs {
    /// Emit machine-readable JSON
    #[arg(long)]
    json: bool,
}

impl From<StatusArgs> for status::StatusArgs {
    fn from(args: StatusArgs) -> Self {
        Self { json: args.json }
    }
}

const fn tri_state(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Exit status for a deliberate user decline, so scripts can tell a no-op
/// apart from a completed write
const EXIT_SKIPPED: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Setup(args) => {
            let outcome = setup::execute(args.into()).await?;
            if matches!(outcome, setup::SetupOutcome::Skipped(_)) {
                std::process::exit(EXIT_SKIPPED);
            }
            Ok(())
        }
        Commands::Remove(args) => {
            let outcome = remove::execute(args.into()).await?;
            if matches!(outcome, remove::RemoveOutcome::Skipped(_)) {
                std::process::exit(EXIT_SKIPPED);
            }
            Ok(())
        }
        Commands::Status(args) => status::execute(args.into()).await,
    }
}
