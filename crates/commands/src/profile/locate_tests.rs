//! Unit tests for shell profile location

use claude_gateway_runtime::deps::RealFileSystem;

use super::locate_profile;

#[test]
fn zsh_resolves_to_zshrc() {
    let dir = tempfile::tempdir().unwrap();
    let path = locate_profile(Some("/bin/zsh"), dir.path(), &RealFileSystem);

    assert_eq!(path, dir.path().join(".zshrc"));
}

#[test]
fn bash_prefers_bash_profile_when_present() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".bash_profile"), "").unwrap();

    let path = locate_profile(Some("/bin/bash"), dir.path(), &RealFileSystem);
    assert_eq!(path, dir.path().join(".bash_profile"));
}

#[test]
fn bash_falls_back_to_bashrc() {
    let dir = tempfile::tempdir().unwrap();
    let path = locate_profile(Some("/bin/bash"), dir.path(), &RealFileSystem);

    assert_eq!(path, dir.path().join(".bashrc"));
}

#[test]
fn unknown_shell_falls_back_to_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = locate_profile(Some("/usr/bin/fish"), dir.path(), &RealFileSystem);

    assert_eq!(path, dir.path().join(".profile"));
}

#[test]
fn unset_shell_falls_back_to_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = locate_profile(None, dir.path(), &RealFileSystem);

    assert_eq!(path, dir.path().join(".profile"));
}

#[test]
fn shell_path_is_reduced_to_its_basename() {
    let dir = tempfile::tempdir().unwrap();
    let path = locate_profile(Some("/usr/local/bin/zsh"), dir.path(), &RealFileSystem);

    assert_eq!(path, dir.path().join(".zshrc"));
}

#[test]
fn bare_shell_name_works_without_a_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = locate_profile(Some("zsh"), dir.path(), &RealFileSystem);

    assert_eq!(path, dir.path().join(".zshrc"));
}
