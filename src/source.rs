use image::RgbaImage;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of the one load attempt made per run.
#[derive(Debug)]
pub enum SourceIcon {
    Loaded(RgbaImage),
    Unavailable(SourceUnavailable),
}

/// Why no silhouette can be derived. Never fatal: the generator falls back
/// to placeholders.
#[derive(Debug)]
pub enum SourceUnavailable {
    Missing { path: PathBuf },
    Decode { path: PathBuf, cause: image::ImageError },
    /// Decoded fine but has no pixels to take a silhouette from
    Empty { path: PathBuf },
}

impl fmt::Display for SourceUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceUnavailable::Missing { path } => {
                write!(f, "no launcher icon at {}", path.display())
            }
            SourceUnavailable::Decode { path, cause } => {
                write!(f, "could not decode {}: {}", path.display(), cause)
            }
            SourceUnavailable::Empty { path } => {
                write!(f, "{} decoded to an empty image", path.display())
            }
        }
    }
}

impl std::error::Error for SourceUnavailable {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceUnavailable::Decode { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

/// Try to read the launcher icon at `path` as RGBA.
pub fn load_source_icon(path: &Path) -> SourceIcon {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "launcher icon not present");
        return SourceIcon::Unavailable(SourceUnavailable::Missing {
            path: path.to_path_buf(),
        });
    }

    let decoded = match image::open(path) {
        Ok(img) => img.to_rgba8(),
        Err(cause) => {
            tracing::warn!(path = %path.display(), error = %cause, "launcher icon failed to decode");
            return SourceIcon::Unavailable(SourceUnavailable::Decode {
                path: path.to_path_buf(),
                cause,
            });
        }
    };

    if decoded.width() == 0 || decoded.height() == 0 {
        return SourceIcon::Unavailable(SourceUnavailable::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        width = decoded.width(),
        height = decoded.height(),
        "launcher icon loaded"
    );
    SourceIcon::Loaded(decoded)
}
