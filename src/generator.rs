use anyhow::Context;
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

use crate::density::Density;
use crate::icon::{derive_silhouette, resize_square, synthesize_placeholder, write_png};
use crate::source::SourceIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Silhouette,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub density: Density,
    pub path: PathBuf,
    pub kind: IconKind,
}

/// A density whose icon could not be written. Other densities are unaffected.
#[derive(Debug)]
pub struct DensityFailure {
    pub density: Density,
    pub path: PathBuf,
    pub error: anyhow::Error,
}

#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<WrittenIcon>,
    pub failures: Vec<DensityFailure>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn written_paths(&self) -> Vec<&Path> {
        self.written.iter().map(|icon| icon.path.as_path()).collect()
    }
}

/// Write one notification icon per density, in the order given.
///
/// `output_dir` maps a density to the directory its icon goes into; it is
/// created if missing. The silhouette is derived once from a loaded
/// source and resized per density. Without a source every density gets a
/// placeholder rendered at its own size.
pub fn generate_all<F>(
    source: &SourceIcon,
    densities: &[Density],
    output_file: &str,
    output_dir: F,
) -> GenerationReport
where
    F: Fn(Density) -> PathBuf,
{
    let silhouette = match source {
        SourceIcon::Loaded(img) => Some(derive_silhouette(img)),
        SourceIcon::Unavailable(_) => None,
    };

    let mut report = GenerationReport::default();

    for &density in densities {
        let dir = output_dir(density);
        let path = dir.join(output_file);

        match render_density(silhouette.as_ref(), density, &dir, &path) {
            Ok(kind) => {
                tracing::debug!(%density, path = %path.display(), ?kind, "icon written");
                report.written.push(WrittenIcon { density, path, kind });
            }
            Err(error) => {
                tracing::warn!(%density, path = %path.display(), error = %error, "icon not written");
                report.failures.push(DensityFailure { density, path, error });
            }
        }
    }

    report
}

fn render_density(
    silhouette: Option<&RgbaImage>,
    density: Density,
    dir: &Path,
    path: &Path,
) -> anyhow::Result<IconKind> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let size = density.size();
    let (icon, kind) = match silhouette {
        Some(silhouette) => (resize_square(silhouette, size), IconKind::Silhouette),
        None => (synthesize_placeholder(size), IconKind::Placeholder),
    };

    write_png(&icon, path)?;
    Ok(kind)
}

/// Resolver for the standard `res/drawable-<density>` layout.
pub fn drawable_dir_in(res_dir: &Path) -> impl Fn(Density) -> PathBuf + '_ {
    move |density| res_dir.join(density.drawable_dir())
}
