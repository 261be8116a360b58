use crate::{ExecutionContext, Result as HierarchyResult};

use std::future::Future;

use log::{debug, warn};
use sqlx::{Sqlite, Transaction};

const BEGIN_IMMEDIATE: &str = "BEGIN IMMEDIATE";

/// Runs `operation` inside one write transaction.
///
/// The transaction starts with `BEGIN IMMEDIATE` so the write lock is held
/// from the first read. Competing writers then wait on the busy timeout
/// instead of failing when a read snapshot cannot be upgraded.
///
/// The closure receives the transaction by value and hands it back with
/// its result. On `Ok` the transaction is committed; on `Err` it is
/// dropped, which rolls back every statement it ran.
pub async fn db_transaction<F, Fut, T>(
    ctx: &ExecutionContext,
    operation_name: &str,
    operation: F,
) -> HierarchyResult<T>
where
    F: FnOnce(Transaction<'static, Sqlite>) -> Fut,
    Fut: Future<Output = HierarchyResult<(T, Transaction<'static, Sqlite>)>>,
{
    debug!(
        "{} Starting transaction: {}",
        ctx.log_prefix(),
        operation_name
    );

    let tx = ctx.pool.begin_with(BEGIN_IMMEDIATE).await?;

    match operation(tx).await {
        Ok((result, tx)) => {
            tx.commit().await?;
            debug!(
                "{} Transaction {} committed",
                ctx.log_prefix(),
                operation_name
            );
            Ok(result)
        }
        Err(e) => {
            warn!(
                "{} Transaction {} rolled back: {}",
                ctx.log_prefix(),
                operation_name,
                e
            );
            Err(e)
        }
    }
}
