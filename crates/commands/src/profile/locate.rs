//! Shell profile location

use std::path::{Path, PathBuf};

use claude_gateway_runtime::deps::FileSystem;

/// Resolve the shell profile file to write to.
///
/// `shell` is the user's login shell (typically the value of `$SHELL`); only
/// its basename matters. Always returns a path — unknown or unset shells
/// fall through to `~/.profile`.
pub fn locate_profile(shell: Option<&str>, home: &Path, fs: &dyn FileSystem) -> PathBuf {
    let shell_name = shell.and_then(|s| s.rsplit('/').next()).unwrap_or("");
    match shell_name {
        "zsh" => home.join(".zshrc"),
        "bash" => {
            let bash_profile = home.join(".bash_profile");
            if fs.exists(&bash_profile) {
                bash_profile
            } else {
                home.join(".bashrc")
            }
        }
        _ => home.join(".profile"),
    }
}

#[cfg(test)]
#[path = "locate_tests.rs"]
mod tests;
