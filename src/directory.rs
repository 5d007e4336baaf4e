//! Output directory preparation.

use crate::error::{Error, Result};

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info};

/// Result of [`prepare_output_dir`].
#[derive(Debug)]
pub enum Prepared {
    /// The directory (and any missing parent) was created.
    Created,
    /// The directory was already there.
    AlreadyExists,
    /// The directory could not be created. Downloads will surface the
    /// problem individually when they try to create their files.
    Failed(io::Error),
}

impl Prepared {
    pub fn is_ready(&self) -> bool {
        !matches!(self, Prepared::Failed(_))
    }
}

/// Resolve `dir` against the current working directory.
///
/// An absolute `dir` is returned unchanged.
pub fn resolve_output_dir(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|source| Error::WorkingDirectory { source })?;
    Ok(cwd.join(dir))
}

/// Make sure `path` exists as a directory.
///
/// Never fails the run: errors are logged and reported as
/// [`Prepared::Failed`].
pub async fn prepare_output_dir(path: &Path) -> Prepared {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => {
            info!("Folder already exists: {}", path.display());
            Prepared::AlreadyExists
        }
        Ok(_) => {
            let e = io::Error::other(format!("{} exists and is not a directory", path.display()));
            error!("{}", e);
            Prepared::Failed(e)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => match fs::create_dir_all(path).await {
            Ok(()) => {
                info!("Folder created: {}", path.display());
                Prepared::Created
            }
            Err(e) => {
                error!("Cannot create folder {}: {}", path.display(), e);
                Prepared::Failed(e)
            }
        },
        Err(e) => {
            error!("Cannot inspect folder {}: {}", path.display(), e);
            Prepared::Failed(e)
        }
    }
}
