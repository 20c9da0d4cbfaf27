//! End-to-end test: help and version output.

mod common;

use tempfile::tempdir;

#[test]
fn help_lists_subcommands() {
    let dir = tempdir().unwrap();
    let output = common::run(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = common::stdout_of(&output);
    assert!(stdout.contains("build"), "stdout:\n{stdout}");
    assert!(stdout.contains("list"), "stdout:\n{stdout}");
}

#[test]
fn version_prints_package_version() {
    let dir = tempdir().unwrap();
    let output = common::run(dir.path(), &["--version"]);

    assert!(output.status.success());
    let stdout = common::stdout_of(&output);
    assert!(stdout.contains("widgetpack"), "stdout:\n{stdout}");
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "stdout:\n{stdout}");
}
