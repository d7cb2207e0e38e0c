//! Common utilities for the claude-gateway CLI
//!
//! This crate contains shared utilities used across the claude-gateway
//! crates: the interactive user interface implementations and the Claude
//! Code CLI collaborator.

pub mod claude_cli;
pub mod ui;


// Re-export commonly used utilities at the crate root
pub use claude_cli::{ClaudeCli, RealClaudeCli};
pub use ui::RealUserInterface;
