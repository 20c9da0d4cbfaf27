//! Configuration for widgetpack
//!
//! An optional `widgetpack.toml` next to the project root supplies the
//! version token and directory layout. CLI flags override file values;
//! a missing file means defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{WidgetpackError, WidgetpackResult};

fn default_version() -> String {
    "0.0.0".to_string()
}

fn default_source() -> PathBuf {
    PathBuf::from("src")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist/assets")
}

/// Build configuration
///
/// `version` is the batch cache-bust token input: it is hashed once per
/// run and the result is shared by every artifact in that run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Version token the batch hash is derived from
    #[serde(default = "default_version")]
    pub version: String,

    /// Root directory holding one subdirectory per widget
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Output directory, destructively cleared at run start
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Shared stylesheet prepended to every widget's CSS imports.
    /// Defaults to `<source>/global.css`; missing file is fine.
    #[serde(default)]
    pub global_css: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            source: default_source(),
            out_dir: default_out_dir(),
            global_css: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Call sites use `Config::load(path).unwrap_or_default()` when the
    /// file is optional, but a file that exists and fails to parse is a
    /// hard error so typos never silently fall back to defaults.
    pub fn load(path: &Path) -> WidgetpackResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| WidgetpackError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Effective global stylesheet path: the configured one, or
    /// `<source>/global.css` when none is set.
    pub fn effective_global_css(&self) -> PathBuf {
        self.global_css
            .clone()
            .unwrap_or_else(|| self.source.join("global.css"))
    }
}
