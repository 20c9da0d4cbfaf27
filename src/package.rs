//! Self-contained HTML packaging
//!
//! The terminal artifact per widget: one document with the finalized
//! script and stylesheet inlined verbatim. The host fetches this single
//! file and renders it in a sandboxed, possibly network-restricted frame,
//! so the document must carry zero external references.

use std::fs;
use std::path::PathBuf;

use crate::error::WidgetpackResult;
use crate::models::{HashedArtifact, WidgetPackage};
use crate::rename::hashed_name;
use crate::writer;

/// Assemble the document text
///
/// A widget with no stylesheet gets no `<style>` block and a widget with
/// no script gets no `<script>` block; both are legal. The root container
/// id is `<widget_id>-root`, the mount point the widget's own code looks
/// up at import time.
pub fn package_html(widget_id: &str, style: Option<&str>, script: Option<&str>) -> String {
    let mut html = String::new();
    html.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");

    if let Some(css) = style {
        html.push_str("<style>\n");
        html.push_str(css);
        if !css.ends_with('\n') {
            html.push('\n');
        }
        html.push_str("</style>\n");
    }

    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<div id=\"{widget_id}-root\"></div>\n"));

    if let Some(js) = script {
        html.push_str("<script type=\"module\">\n");
        html.push_str(js);
        if !js.ends_with('\n') {
            html.push('\n');
        }
        html.push_str("</script>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Read a widget's finalized outputs and write `<id>-<token>.html`
pub fn package_widget(
    artifact: &HashedArtifact,
    out_dir: &std::path::Path,
    token: &str,
) -> WidgetpackResult<WidgetPackage> {
    let style = read_optional(&artifact.style_path)?;
    let script = read_optional(&artifact.script_path)?;

    let html = package_html(
        &artifact.widget_id,
        non_empty(style.as_deref()),
        non_empty(script.as_deref()),
    );

    let html_path = hashed_name(
        &out_dir.join(format!("{}.html", artifact.widget_id)),
        token,
    );
    writer::write_atomic(&html_path, &html)?;

    Ok(WidgetPackage {
        widget_id: artifact.widget_id.clone(),
        html_path,
    })
}

fn read_optional(path: &Option<PathBuf>) -> WidgetpackResult<Option<String>> {
    match path {
        Some(p) => Ok(Some(fs::read_to_string(p)?)),
        None => Ok(None),
    }
}

/// Whitespace-only bundler output collapses to an absent block
fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
