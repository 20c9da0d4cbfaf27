//! Widgetpack CLI - deterministic widget asset build pipeline
//!
//! Usage: widgetpack <COMMAND>
//!
//! Commands:
//!   build   Bundle every widget and emit self-contained HTML artifacts
//!   list    Show discovered widgets in build order without building

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use widgetpack::{batch_token, discover, BuildPipeline, Config, Esbuild};

/// Default config filename, looked up in the working directory
const CONFIG_FILE: &str = "widgetpack.toml";

/// Widgetpack - deterministic widget asset build pipeline
#[derive(Parser, Debug)]
#[command(name = "widgetpack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bundle every widget and emit self-contained HTML artifacts
    Build {
        /// Root directory with one subdirectory per widget
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output directory (destructively cleared at run start)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Version token the batch cache-bust hash is derived from
        #[arg(long)]
        release_tag: Option<String>,

        /// Shared stylesheet prepended to every widget
        #[arg(long)]
        global_css: Option<PathBuf>,
    },

    /// Show discovered widgets in build order without building
    List {
        /// Root directory with one subdirectory per widget
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Shared stylesheet prepended to every widget
        #[arg(long)]
        global_css: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            source,
            out_dir,
            release_tag,
            global_css,
        } => cmd_build(
            source,
            out_dir,
            release_tag,
            global_css,
            cli.json,
            cli.verbose,
        ),
        Commands::List { source, global_css } => cmd_list(source, global_css, cli.json),
    }
}

/// Load widgetpack.toml when present, then apply CLI overrides
fn load_config(
    source: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    release_tag: Option<String>,
    global_css: Option<PathBuf>,
) -> Result<Config> {
    let config_path = Path::new(CONFIG_FILE);
    let mut config = if config_path.is_file() {
        Config::load(config_path)?
    } else {
        Config::default()
    };

    if let Some(source) = source {
        config.source = source;
    }
    if let Some(out_dir) = out_dir {
        config.out_dir = out_dir;
    }
    if let Some(version) = release_tag {
        config.version = version;
    }
    if let Some(global_css) = global_css {
        config.global_css = Some(global_css);
    }

    Ok(config)
}

fn cmd_build(
    source: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    release_tag: Option<String>,
    global_css: Option<PathBuf>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let config = load_config(source, out_dir, release_tag, global_css)?;
    let token = batch_token(&config.version);

    if !json {
        println!("📦 Widgetpack Build");
        println!("Source: {}", config.source.display());
        println!("Output: {}", config.out_dir.display());
        if verbose > 0 {
            println!("Version token: {} (batch hash {})", config.version, token);
        }
    }

    // Fail fast on an empty tree before requiring the bundler; run()
    // repeats the (cheap) discovery in the same order.
    let entries = discover(&config.source, &config.effective_global_css())?;
    if !json {
        println!("\n✓ Discovered {} widgets", entries.len());
    }

    // Locate the bundler before the destructive output clear
    let bundler = Esbuild::locate()?;
    let pipeline = BuildPipeline::new(config, bundler);
    let packages = pipeline.run()?;

    if json {
        let output = serde_json::json!({
            "event": "build",
            "status": "success",
            "token": token,
            "widgets": packages.len(),
            "packages": packages,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("\n✓ Packaged {} widgets", packages.len());
        for package in &packages {
            println!("  - {} -> {}", package.widget_id, package.html_path.display());
        }
    }

    Ok(())
}

fn cmd_list(source: Option<PathBuf>, global_css: Option<PathBuf>, json: bool) -> Result<()> {
    let config = load_config(source, None, None, global_css)?;
    let entries = discover(&config.source, &config.effective_global_css())?;

    if json {
        let widgets: Vec<_> = entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "id": e.id,
                    "entry": e.entry_path,
                    "stylesheets": e.css_paths.len(),
                })
            })
            .collect();
        let output = serde_json::json!({ "event": "list", "widgets": widgets });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("📦 Widgetpack - {} widgets in build order", entries.len());
        for entry in &entries {
            println!(
                "  - {} ({}, {} stylesheets)",
                entry.id,
                entry.entry_path.display(),
                entry.css_paths.len()
            );
        }
    }

    Ok(())
}
