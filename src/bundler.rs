//! Bundler seam
//!
//! The pipeline never links against a bundler; it drives one through the
//! `Bundler` trait so tests can swap in a fake. The production
//! implementation shells out to the `esbuild` binary, feeding the
//! synthesized virtual entry over stdin so it never touches disk.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{WidgetpackError, WidgetpackResult};
use crate::models::BuildArtifact;

/// One widget's compile request
#[derive(Debug, Clone)]
pub struct CompileRequest<'a> {
    /// Widget id; namespaces every output file
    pub widget_id: &'a str,
    /// Synthesized virtual entry source (ESM)
    pub source: &'a str,
    /// Directory relative imports resolve against (the widget directory)
    pub resolve_dir: &'a Path,
    /// Output directory; already cleared by the pipeline
    pub out_dir: &'a Path,
}

/// The compiler boundary
///
/// Implementations must produce one dependency-complete unit per request:
/// no code splitting, dynamic imports inlined, at most one CSS file,
/// minified, with sourcemaps.
pub trait Bundler {
    fn bundle(&self, request: &CompileRequest<'_>) -> WidgetpackResult<BuildArtifact>;
}

/// Production bundler backed by the `esbuild` binary
#[derive(Debug, Clone)]
pub struct Esbuild {
    binary: PathBuf,
}

/// Binary name looked up on PATH
const ESBUILD_BINARY: &str = "esbuild";

impl Esbuild {
    /// Locate esbuild on PATH
    ///
    /// Runs before the output directory is cleared, so a missing bundler
    /// cannot destroy a previous build.
    pub fn locate() -> WidgetpackResult<Self> {
        let binary = which::which(ESBUILD_BINARY).map_err(|_| WidgetpackError::BundlerNotFound {
            name: ESBUILD_BINARY.to_string(),
        })?;
        Ok(Self { binary })
    }

    #[cfg(test)]
    fn at(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Bundler for Esbuild {
    fn bundle(&self, request: &CompileRequest<'_>) -> WidgetpackResult<BuildArtifact> {
        let outfile = request.out_dir.join(format!("{}.js", request.widget_id));

        let mut child = Command::new(&self.binary)
            .arg("--bundle")
            .arg("--minify")
            .arg("--sourcemap")
            .arg("--format=esm")
            .arg("--jsx=automatic")
            // Stdin is the virtual entry; name it for diagnostics
            .arg("--loader=tsx")
            .arg(format!("--sourcefile={}.virtual.tsx", request.widget_id))
            .arg("--loader:.tsx=tsx")
            .arg("--loader:.ts=ts")
            .arg("--loader:.svg=dataurl")
            .arg("--loader:.png=dataurl")
            .arg(format!("--outfile={}", outfile.display()))
            .current_dir(request.resolve_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(request.source.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            // Surface esbuild's diagnostic verbatim
            return Err(WidgetpackError::CompileFailure {
                widget: request.widget_id.to_string(),
                message: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(collect_outputs(request.widget_id, request.out_dir))
    }
}

/// Probe the output directory for whatever the bundler emitted
///
/// Absent files are normal: a widget with no CSS imports emits no `.css`,
/// and the artifact records exactly what exists.
pub(crate) fn collect_outputs(widget_id: &str, out_dir: &Path) -> BuildArtifact {
    let probe = |suffix: &str| -> Option<PathBuf> {
        let path = out_dir.join(format!("{widget_id}{suffix}"));
        path.is_file().then_some(path)
    };

    let mut artifact = BuildArtifact::new(widget_id);
    artifact.script_path = probe(".js");
    artifact.style_path = probe(".css");
    artifact.script_map_path = probe(".js.map");
    artifact.style_map_path = probe(".css.map");
    artifact
}
