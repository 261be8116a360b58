use dms_hierarchy::DirectoryMirror;

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Creates directories like the real mirror, except for any path whose
/// last segment equals `fail_on`.
pub struct FailingMirror {
    fail_on: String,
    pub attempts: AtomicUsize,
}

impl FailingMirror {
    pub fn new(fail_on: &str) -> Self {
        Self {
            fail_on: fail_on.to_string(),
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectoryMirror for FailingMirror {
    async fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if path.file_name().is_some_and(|name| name == self.fail_on.as_str()) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated permission denied",
            ));
        }

        tokio::fs::create_dir_all(path).await
    }
}
