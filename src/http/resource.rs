//! Resolution of a request target to a file on disk.
//!
//! A request is resolved exactly once. The header and the body are both
//! produced from the same [`Resource`], so the status line and the content
//! always agree even if the file changes underneath us.

use std::path::{Component, Path, PathBuf};

use tokio::fs::File;
use tracing::debug;

#[derive(Debug)]
pub enum Resource {
    /// A regular file, already opened for reading.
    Found { path: PathBuf, file: File, len: u64 },
    Missing,
}

impl Resource {
    /// Looks up `target_path` under `root`, with one leading `/` removed.
    pub async fn resolve(root: &Path, target_path: &str) -> Self {
        let Some(path) = local_path(root, target_path) else {
            debug!(path = %target_path, "Rejected target outside root");
            return Resource::Missing;
        };

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(m) if m.is_file() => m,
            _ => return Resource::Missing,
        };

        match File::open(&path).await {
            Ok(file) => Resource::Found {
                path,
                file,
                len: metadata.len(),
            },
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Failed to open file");
                Resource::Missing
            }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resource::Found { .. })
    }

    /// Size on disk when the file was resolved.
    pub fn file_len(&self) -> Option<u64> {
        match self {
            Resource::Found { len, .. } => Some(*len),
            Resource::Missing => None,
        }
    }
}

/// Maps a request target to a path under `root`, or `None` if it would
/// escape it.
pub fn local_path(root: &Path, target_path: &str) -> Option<PathBuf> {
    let relative = Path::new(target_path.strip_prefix('/').unwrap_or(target_path));

    let escapes = relative.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });

    if escapes {
        None
    } else {
        Some(root.join(relative))
    }
}
