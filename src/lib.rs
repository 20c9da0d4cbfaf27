//! Widgetpack - deterministic widget asset build pipeline
//!
//! Widgetpack discovers independent micro-frontend ("widget") source trees,
//! bundles each one into an isolated, dependency-complete unit, stamps the
//! batch cache-bust token into every filename, and emits one self-contained
//! HTML artifact per widget with script and stylesheet inlined - the only
//! file a sandboxed host needs to fetch.

pub mod bundler;
pub mod config;
pub mod discover;
pub mod error;
pub mod hash;
pub mod models;
pub mod package;
pub mod pipeline;
pub mod rename;
pub mod virtual_entry;
pub mod writer;

// Re-exports for convenience
pub use bundler::{Bundler, CompileRequest, Esbuild};
pub use config::Config;
pub use discover::discover;
pub use error::{WidgetpackError, WidgetpackResult};
pub use hash::{batch_token, TOKEN_LEN};
pub use models::{BuildArtifact, HashedArtifact, WidgetEntry, WidgetPackage};
pub use package::package_html;
pub use pipeline::BuildPipeline;
pub use rename::{hashed_name, rename_with_token};
pub use virtual_entry::synthesize;
