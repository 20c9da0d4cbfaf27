//! Shared fixtures for widgetpack integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Path to the compiled widgetpack binary
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_widgetpack")
}

/// Run the binary with args in `cwd` and capture the output
pub fn run(cwd: &Path, args: &[&str]) -> std::process::Output {
    Command::new(bin())
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("failed to run widgetpack binary")
}

/// Create `<root>/<name>/index.tsx` with the given body
pub fn write_widget(root: &Path, name: &str, body: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    let entry = dir.join("index.tsx");
    fs::write(&entry, body).unwrap();
    entry
}

/// Create a stylesheet inside a widget directory
pub fn write_css(root: &Path, name: &str, file: &str, body: &str) -> PathBuf {
    let path = root.join(name).join(file);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, body).unwrap();
    path
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
