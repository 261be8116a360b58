use crate::{DirectoryMirror, LocalDirectoryMirror};

use dms_config::HierarchyConfig;

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::info_span;
use uuid::Uuid;

/// Everything one hierarchy operation needs, passed in explicitly.
#[derive(Clone)]
pub struct ExecutionContext {
    /// User performing the operation, recorded in the transaction log
    pub actor_id: i64,
    /// Correlates every log line of one operation
    pub correlation_id: Uuid,
    /// Store of record
    pub pool: SqlitePool,
    /// Root of the on-disk mirror
    pub base_dir: PathBuf,
    pub mirror: Arc<dyn DirectoryMirror>,
    pub settings: HierarchyConfig,
}

impl ExecutionContext {
    pub fn new(actor_id: i64, pool: SqlitePool, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            actor_id,
            correlation_id: Uuid::new_v4(),
            pool,
            base_dir: base_dir.into(),
            mirror: Arc::new(LocalDirectoryMirror),
            settings: HierarchyConfig::default(),
        }
    }

    pub fn with_mirror(mut self, mirror: Arc<dyn DirectoryMirror>) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn with_settings(mut self, settings: HierarchyConfig) -> Self {
        self.settings = settings;
        self
    }

    /// Get log prefix for structured logging
    pub fn log_prefix(&self) -> String {
        format!("[corr={} actor={}]", self.correlation_id, self.actor_id)
    }

    pub fn operation_span(&self, operation: &str) -> tracing::Span {
        info_span!(
            "hierarchy_operation",
            correlation_id = %self.correlation_id,
            actor_id = self.actor_id,
            operation = %operation,
        )
    }
}

impl std::fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("actor_id", &self.actor_id)
            .field("correlation_id", &self.correlation_id)
            .field("base_dir", &self.base_dir)
            .finish()
    }
}
