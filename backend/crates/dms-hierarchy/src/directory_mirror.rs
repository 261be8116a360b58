//! On-disk mirror of the location hierarchy.
//!
//! Every storage unit has a directory at
//! `<base_dir>/<department folder>/<full_path>`. The database is the
//! source of truth; directories are created alongside inserts and are
//! never removed by the engine.

use std::io;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

#[async_trait]
pub trait DirectoryMirror: Send + Sync {
    /// Create `path` and any missing parents. An existing directory is success.
    async fn ensure_dir(&self, path: &Path) -> io::Result<()>;
}

/// Mirror backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDirectoryMirror;

#[async_trait]
impl DirectoryMirror for LocalDirectoryMirror {
    async fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }
}

/// Absolute directory for a unit. Only normal path segments of the
/// department folder are used, so the result always stays under `base_dir`.
pub fn resolve_target(base_dir: &Path, department_folder: &str, full_path: &str) -> PathBuf {
    let mut target = base_dir.to_path_buf();

    for component in Path::new(department_folder).components() {
        if let Component::Normal(segment) = component {
            target.push(segment);
        }
    }

    for segment in full_path.split('/').filter(|s| !s.is_empty()) {
        target.push(segment);
    }

    target
}
