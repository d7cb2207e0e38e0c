//! Idempotent reconciliation of the gateway block into a profile file

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use claude_gateway_runtime::deps::FileSystem;

use super::block::{ConfigBlock, MARKER_TAG};

/// Result of a reconciliation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The block was written to the profile
    Applied,
    /// The user declined to replace an existing block; nothing was touched
    Skipped,
}

/// Whether `content` contains a previously written gateway block
pub fn contains_gateway_block(content: &str) -> bool {
    content.lines().any(|line| line.contains(MARKER_TAG))
}

/// Remove every marker-delimited gateway block from `content`.
///
/// Each line containing the detection substring toggles a skip state; marker
/// lines and skipped lines are dropped. One blank line immediately before an
/// opening marker is dropped with the block — it is the blank line the
/// block's own rendering introduced, and keeping it would grow the file by
/// one line on every replace. A trailing region opened by an unpaired marker
/// is dropped to the end of the file.
pub fn strip_gateway_blocks(content: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut in_block = false;
    for line in content.lines() {
        if line.contains(MARKER_TAG) {
            if !in_block && kept.last().is_some_and(|last| last.is_empty()) {
                kept.pop();
            }
            in_block = !in_block;
            continue;
        }
        if !in_block {
            kept.push(line);
        }
    }
    if kept.is_empty() {
        String::new()
    } else {
        let mut filtered = kept.join("\n");
        filtered.push('\n');
        filtered
    }
}

/// Reconcile `block` into the profile at `path`.
///
/// Detects an existing gateway block by the marker substring; when one is
/// present, `confirm_replace` decides whether it is removed first. Declining
/// leaves the file byte-for-byte untouched. The rewrite that removes an old
/// block is atomic, and the new block is appended in a single write that
/// creates the file when it does not exist yet.
pub fn apply_block(
    fs: &dyn FileSystem,
    path: &Path,
    block: &ConfigBlock,
    confirm_replace: &dyn Fn() -> Result<bool>,
) -> Result<ReconcileOutcome> {
    if fs.exists(path) {
        let content = fs.read_to_string(path)?;
        if contains_gateway_block(&content) {
            if !confirm_replace()? {
                debug!(path = %path.display(), "existing gateway block kept");
                return Ok(ReconcileOutcome::Skipped);
            }
            debug!(path = %path.display(), "removing existing gateway block");
            fs.write_atomic(path, &strip_gateway_blocks(&content))?;
        }
    }

    fs.append(path, &block.render())?;
    Ok(ReconcileOutcome::Applied)
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
