use crate::{ExecutionContext, HierarchyError, Result as HierarchyResult};

use dms_core::TransactionLog;
use dms_db::TransactionLogRepository;

use log::{info, warn};

pub const CREATE_UNIT: &str = "create_unit";
pub const UPDATE_CAPACITY: &str = "update_capacity";
pub const DELETE_UNIT: &str = "delete_unit";
pub const ADD_FULL_HIERARCHY: &str = "add_full_hierarchy";
pub const REMOVE_FILE_ASSOCIATION: &str = "remove_file_association";

/// Best-effort writer for the transaction log.
pub struct AuditRecorder;

impl AuditRecorder {
    /// Stores one record through the pool. A failure is logged and
    /// swallowed; it never replaces the outcome being recorded.
    pub async fn record(ctx: &ExecutionContext, entry: TransactionLog) {
        if let Err(e) = TransactionLogRepository::create(&ctx.pool, &entry).await {
            warn!(
                "{} Failed to write transaction log for {} (non-fatal): {}",
                ctx.log_prefix(),
                entry.operation,
                e
            );
        }
    }

    /// Logs and records the outcome of a write, then hands it back unchanged.
    /// Must be called after the operation's transaction has ended.
    pub async fn finish<T>(
        ctx: &ExecutionContext,
        operation: &str,
        result: HierarchyResult<T>,
        describe: impl FnOnce(&T) -> String,
    ) -> HierarchyResult<T> {
        let entry = match &result {
            Ok(value) => {
                let message = describe(value);
                info!("{} {} succeeded: {}", ctx.log_prefix(), operation, message);
                TransactionLog::success(ctx.actor_id, operation, message)
            }
            Err(e) => {
                warn!("{} {} failed: {}", ctx.log_prefix(), operation, e);
                TransactionLog::failure(ctx.actor_id, operation, failure_message(e))
            }
        };

        Self::record(ctx, entry).await;

        result
    }
}

fn failure_message(error: &HierarchyError) -> String {
    format!("[{}] {}", error.error_code(), error.user_message())
}
