//! Core data models for widgetpack
//!
//! Defines the values that flow through one build batch:
//! - `WidgetEntry`: a discovered widget source tree
//! - `BuildArtifact`: raw bundler output for one widget, pre-hash
//! - `HashedArtifact`: the same files after the batch token rename
//! - `WidgetPackage`: the terminal self-contained HTML artifact
//!
//! All of these are run-scoped: they are produced, consumed, and dropped
//! within a single pipeline invocation. There is no persisted build state.

use serde::Serialize;
use std::path::PathBuf;

/// A discovered widget entry point
///
/// `id` is derived from the immediate parent directory name and is unique
/// within one build batch (directories cannot collide on disk).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEntry {
    /// Widget identifier (immediate parent directory name)
    pub id: String,

    /// Absolute path to the recognized entry file
    pub entry_path: PathBuf,

    /// Stylesheets to force-include, in import order: the shared global
    /// stylesheet first (when present), then per-widget stylesheets in
    /// lexicographic order. Deduplicated; every path exists at discovery time.
    pub css_paths: Vec<PathBuf>,
}

impl WidgetEntry {
    pub fn new(id: impl Into<String>, entry_path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            entry_path: entry_path.into(),
            css_paths: Vec::new(),
        }
    }
}

/// Raw bundler output for one widget, before the cache-bust rename
///
/// Script and style are both optional: an effect-only widget may bundle to
/// script with no CSS, and a CSS-only widget to style with no meaningful
/// script. Sourcemaps accompany whichever outputs exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifact {
    pub widget_id: String,
    pub script_path: Option<PathBuf>,
    pub style_path: Option<PathBuf>,
    pub script_map_path: Option<PathBuf>,
    pub style_map_path: Option<PathBuf>,
}

impl BuildArtifact {
    pub fn new(widget_id: impl Into<String>) -> Self {
        Self {
            widget_id: widget_id.into(),
            script_path: None,
            style_path: None,
            script_map_path: None,
            style_map_path: None,
        }
    }
}

/// A `BuildArtifact` after the batch token was inserted into every basename
/// and companion sourcemaps were realigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedArtifact {
    pub widget_id: String,
    pub script_path: Option<PathBuf>,
    pub style_path: Option<PathBuf>,
    pub script_map_path: Option<PathBuf>,
    pub style_map_path: Option<PathBuf>,
}

/// Terminal artifact: one self-contained HTML document per widget
///
/// The only file a downstream host needs to fetch. Serializes for the
/// `--json` output mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetPackage {
    pub widget_id: String,
    pub html_path: PathBuf,
}
