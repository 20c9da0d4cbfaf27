//! Widget entry discovery
//!
//! Scans the immediate child directories of the source root for a
//! recognized entry file and collects each widget's stylesheets. Discovery
//! order is lexicographic by entry path so build and log order are
//! reproducible across runs.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{WidgetpackError, WidgetpackResult};
use crate::models::WidgetEntry;

/// Recognized entry filenames, checked in this order
const ENTRY_CANDIDATES: [&str; 4] = ["index.tsx", "index.ts", "index.jsx", "index.js"];

/// Discover all widget entries under `root`
///
/// `global_css`, when it exists, is prepended to every widget's stylesheet
/// list; a missing global stylesheet is a normal state. Fails with
/// `DiscoveryEmpty` when zero entries are found - an empty build is never
/// valid.
pub fn discover(root: &Path, global_css: &Path) -> WidgetpackResult<Vec<WidgetEntry>> {
    if !root.is_dir() {
        return Err(WidgetpackError::SourceNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(root)? {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();

        if !path.is_dir() {
            continue;
        }
        // Skip hidden directories
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with('.'))
            .unwrap_or(true)
        {
            continue;
        }

        if let Some(entry) = discover_widget(&path, global_css) {
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        return Err(WidgetpackError::DiscoveryEmpty {
            root: root.to_path_buf(),
        });
    }

    // Deterministic build order
    entries.sort_by(|a, b| a.entry_path.cmp(&b.entry_path));

    Ok(entries)
}

/// Inspect one child directory; `None` when it holds no recognized entry
fn discover_widget(dir: &Path, global_css: &Path) -> Option<WidgetEntry> {
    let entry_path = ENTRY_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())?;

    let id = dir.file_name()?.to_str()?.to_string();

    let mut entry = WidgetEntry::new(id, entry_path);
    entry.css_paths = resolve_css(dir, global_css);
    Some(entry)
}

/// Stylesheets for one widget: global first, then per-widget in
/// lexicographic order, deduplicated, existing files only.
fn resolve_css(dir: &Path, global_css: &Path) -> Vec<PathBuf> {
    let mut css = Vec::new();

    if global_css.is_file() {
        css.push(global_css.to_path_buf());
    }

    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .hidden(true)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    for entry in walker.flatten() {
        let path = entry.path();
        if path.is_file() && path.extension().map(|e| e == "css").unwrap_or(false) {
            let path = path.to_path_buf();
            if !css.contains(&path) {
                css.push(path);
            }
        }
    }

    css
}
