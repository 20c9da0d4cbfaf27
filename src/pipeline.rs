//! Build orchestration
//!
//! One stateless batch: discover, build every widget in discovery order,
//! derive the batch token, rename, package. Any widget's compile failure
//! aborts the batch immediately; files already written for earlier widgets
//! stay on disk, and a failed run restarts from scratch.

use crate::bundler::{Bundler, CompileRequest};
use crate::config::Config;
use crate::discover::discover;
use crate::error::WidgetpackResult;
use crate::hash::batch_token;
use crate::models::{BuildArtifact, WidgetPackage};
use crate::package::package_widget;
use crate::rename::rename_artifact;
use crate::virtual_entry::synthesize;
use crate::writer;

/// Unified pipeline for discovery + bundling + hashing + packaging
#[derive(Debug, Clone)]
pub struct BuildPipeline<B: Bundler> {
    config: Config,
    bundler: B,
}

impl<B: Bundler> BuildPipeline<B> {
    pub fn new(config: Config, bundler: B) -> Self {
        Self { config, bundler }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the whole batch
    ///
    /// The output directory is destructively cleared exactly once, before
    /// the first widget builds; afterwards the run only appends. Returned
    /// packages are in discovery (lexicographic) order.
    pub fn run(&self) -> WidgetpackResult<Vec<WidgetPackage>> {
        let entries = discover(&self.config.source, &self.config.effective_global_css())?;

        writer::reset_dir(&self.config.out_dir)?;

        let mut artifacts: Vec<BuildArtifact> = Vec::with_capacity(entries.len());
        for entry in &entries {
            let source = synthesize(entry);
            let resolve_dir = entry
                .entry_path
                .parent()
                .unwrap_or_else(|| self.config.source.as_path());

            let request = CompileRequest {
                widget_id: &entry.id,
                source: &source,
                resolve_dir,
                out_dir: &self.config.out_dir,
            };
            artifacts.push(self.bundler.bundle(&request)?);
        }

        let token = batch_token(&self.config.version);

        let mut packages = Vec::with_capacity(artifacts.len());
        for artifact in &artifacts {
            let hashed = rename_artifact(artifact, &token)?;
            packages.push(package_widget(&hashed, &self.config.out_dir, &token)?);
        }

        Ok(packages)
    }
}
