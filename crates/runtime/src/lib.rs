//! Runtime services and abstractions for the claude-gateway CLI
//!
//! This crate defines the dependency-injection traits the command
//! implementations are written against, plus their production
//! implementations.

pub mod deps;
