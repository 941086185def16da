//! navtree: inspect and resolve feature navigation manifests.
//!
//! # Architecture Overview
//!
//! ```text
//!   navtree.toml
//!       │
//!       ▼
//!  ┌──────────┐    ┌───────────┐    ┌───────────┐    ┌───────────┐
//!  │  config  │───▶│  feature  │───▶│  routing  │───▶│  aspect   │───▶ JSON tree
//!  │  loader  │    │ validate/ │    │ resolver  │    │ container │
//!  └──────────┘    │ assemble  │    └───────────┘    └───────────┘
//!                  └───────────┘
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;

use feature_navigation::config::loader::load_manifest;
use feature_navigation::config::schema::Manifest;
use feature_navigation::config::watcher::ManifestWatcher;
use feature_navigation::feature::active_features;
use feature_navigation::lifecycle::{collect_issues, launch, manifest_aspect};
use feature_navigation::observability::init_logging;
use feature_navigation::routing::matcher::RouteFilter;
use feature_navigation::screens::to_screens;

#[derive(Parser)]
#[command(name = "navtree")]
#[command(about = "Resolve feature navigation manifests into navigation trees", long_about = None)]
struct Cli {
    /// Manifest describing features and the navigation pattern.
    #[arg(short, long, default_value = "navtree.toml")]
    manifest: PathBuf,

    /// Override the manifest's log level.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report every configuration and feature problem
    Check,
    /// Print the resolved navigation tree
    Resolve {
        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },
    /// Print the assembled route registry
    Routes {
        /// Keep routes starting with this prefix (repeatable)
        #[arg(long = "prefix")]
        prefixes: Vec<String>,
        /// Keep this route (repeatable)
        #[arg(long = "name")]
        names: Vec<String>,
    },
    /// Print a screen descriptor per route
    Screens,
    /// Resolve again whenever the manifest changes
    Watch,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut manifest = load_manifest(&cli.manifest)?;
    if let Some(level) = cli.log_level {
        manifest.observability.log_level = level;
    }
    init_logging(&manifest.observability);

    tracing::debug!(
        manifest = %cli.manifest.display(),
        aspect = %manifest.aspect.name,
        "Manifest ready"
    );

    match cli.command {
        Commands::Check => {
            let aspect = manifest_aspect(&manifest)?;
            let issues = collect_issues(&aspect, &manifest.features);
            if issues.is_empty() {
                println!("ok");
                return Ok(ExitCode::SUCCESS);
            }
            for issue in &issues {
                println!("{}", issue);
            }
            Ok(ExitCode::FAILURE)
        }
        Commands::Resolve { compact } => {
            let tree = resolve_tree(&manifest)?;
            print_json(&tree, compact)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Routes { prefixes, names } => {
            let aspect = manifest_aspect(&manifest)?;
            let state = aspect.assemble_feature_content(active_features(&manifest.features));
            let filter = RouteFilter::new(names, prefixes);
            let routes = if filter.is_empty() {
                state.routes().clone()
            } else {
                filter.apply(state.routes())
            };
            print_json(&serde_json::to_value(&routes)?, false)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Screens => {
            let aspect = manifest_aspect(&manifest)?;
            let state = aspect.assemble_feature_content(active_features(&manifest.features));
            let screens = to_screens(state.routes().iter());
            print_json(&serde_json::to_value(&screens)?, false)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Watch => {
            watch(&cli.manifest, &manifest)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn resolve_tree(manifest: &Manifest) -> Result<Value, Box<dyn std::error::Error>> {
    let aspect = manifest_aspect(manifest)?;
    let launched = launch(&aspect, &manifest.features, None)?;
    Ok(launched.root.unwrap_or(Value::Null))
}

fn print_json(value: &Value, compact: bool) -> Result<(), serde_json::Error> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", text);
    Ok(())
}

fn watch(path: &Path, initial: &Manifest) -> Result<(), Box<dyn std::error::Error>> {
    match resolve_tree(initial) {
        Ok(tree) => print_json(&tree, false)?,
        Err(e) => tracing::error!("Initial resolution failed: {}", e),
    }

    let (watcher, updates) = ManifestWatcher::new(path);
    let _watcher = watcher.run()?;

    // Runs until the watcher side hangs up.
    for manifest in updates {
        match resolve_tree(&manifest) {
            Ok(tree) => print_json(&tree, false)?,
            Err(e) => tracing::error!("Resolution failed: {}. Waiting for next change.", e),
        }
    }
    Ok(())
}
