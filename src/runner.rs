use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::density::Density;
use crate::generator::{drawable_dir_in, generate_all, GenerationReport, IconKind};
use crate::icon::ensure_png_support;
use crate::source::{load_source_icon, SourceIcon};

/// What the binary was asked to do.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Overrides `res_dir` from the config
    pub res_dir: Option<PathBuf>,
    /// Explicit config file; must exist and be valid
    pub config: Option<PathBuf>,
    /// Where `notification-icons.yaml` is looked up when `config` is unset
    pub work_dir: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            res_dir: None,
            config: None,
            work_dir: PathBuf::from("."),
        }
    }
}

/// One full generation pass, printing progress to the console.
pub fn run(options: &RunOptions) -> Result<GenerationReport> {
    run_with_preflight(options, ensure_png_support)
}

/// Like [`run`], with the capability check supplied by the caller.
/// The check runs before any config or file access; its error is returned as-is.
pub fn run_with_preflight<P>(options: &RunOptions, preflight: P) -> Result<GenerationReport>
where
    P: FnOnce() -> Result<()>,
{
    preflight()?;

    let mut config = match &options.config {
        Some(path) => Config::load(Some(path.as_path()))?,
        None => Config::load_from_dir(&options.work_dir),
    };
    if let Some(res_dir) = &options.res_dir {
        config.res_dir = res_dir.clone();
    }

    println!("Creating notification icons...");
    println!("Resource directory: {}", config.res_dir.display());

    let source_path = config.source_icon_path();
    let source = load_source_icon(&source_path);
    match &source {
        SourceIcon::Loaded(_) => println!("Found launcher icon: {}", source_path.display()),
        SourceIcon::Unavailable(reason) => println!("Using placeholder icons ({})", reason),
    }

    let report = generate_all(
        &source,
        &Density::ALL,
        &config.output_file,
        drawable_dir_in(&config.res_dir),
    );

    for icon in &report.written {
        let note = match icon.kind {
            IconKind::Silhouette => "",
            IconKind::Placeholder => " (placeholder)",
        };
        println!("✓ Created {}{}", icon.path.display(), note);
    }
    for failure in &report.failures {
        eprintln!("✗ {}: {}: {:#}", failure.density, failure.path.display(), failure.error);
    }

    Ok(report)
}
