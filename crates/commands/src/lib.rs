//! Command implementations for the claude-gateway CLI
//!
//! This crate contains the CLI command implementations — gateway setup,
//! removal, and status — plus the shell-profile management core they share.

/// Command implementations module
pub mod commands;

/// Shell-profile management: locating, generating, reconciling
pub mod profile;

#[cfg(test)]
pub mod test_helpers;

// Re-export all commands at the crate root for easier access
pub use commands::{remove, setup, status};
