//! Virtual entry synthesis
//!
//! Each widget is bundled through an ephemeral ESM module that exists only
//! in memory (it is piped to the bundler over stdin, never written to
//! disk). The module guarantees three things the raw entry file cannot:
//!
//! 1. Every resolved stylesheet is imported for side effects, global first.
//! 2. The host-facing default export is the entry's default export, falling
//!    back to an export named `App`; absent when the widget exports neither.
//! 3. The entry module's import-time mount effect runs exactly once when
//!    the bundle loads, whether or not the host ever calls the default.

use std::path::Path;

use crate::models::WidgetEntry;

/// Build the ephemeral module source for one widget entry
pub fn synthesize(entry: &WidgetEntry) -> String {
    let mut src = String::new();

    // Stylesheet side-effect imports, in resolved order
    for css in &entry.css_paths {
        src.push_str(&format!("import \"{}\";\n", module_path(css)));
    }

    let entry_spec = module_path(&entry.entry_path);

    // Named exports pass through untouched
    src.push_str(&format!("export * from \"{entry_spec}\";\n"));

    // Default export with the `App` fallback. ESM evaluates a module once
    // per graph, so the namespace import below doubles as the guaranteed
    // mount-effect trigger.
    src.push_str(&format!(
        "import * as __widget_entry from \"{entry_spec}\";\n"
    ));
    src.push_str(
        "export default __widget_entry.default !== undefined \
         ? __widget_entry.default : __widget_entry.App;\n",
    );
    src.push_str(&format!("import \"{entry_spec}\";\n"));

    src
}

/// Import specifier for a filesystem path
///
/// Bundler import specifiers use forward slashes on every platform.
fn module_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}
