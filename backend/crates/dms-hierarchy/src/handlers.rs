//! Boundary functions: run one operation under its own span and fold the
//! result into an [`OperationOutcome`]. No `HierarchyError` escapes.

use crate::{
    CreateUnitRequest, ExecutionContext, FullHierarchyRequest, HierarchyBulkCreator,
    OperationOutcome, StorageUnitService, audit,
};

use tracing::Instrument;

pub async fn handle_create_unit(
    ctx: &ExecutionContext,
    req: CreateUnitRequest,
) -> OperationOutcome {
    let span = ctx.operation_span(audit::CREATE_UNIT);

    match StorageUnitService::create_unit(ctx, &req)
        .instrument(span)
        .await
    {
        Ok(created) => OperationOutcome::ok(created.summary(), Some(created.id)),
        Err(e) => OperationOutcome::from_error(&e),
    }
}

pub async fn handle_update_capacity(
    ctx: &ExecutionContext,
    location_id: i64,
    new_capacity: i64,
) -> OperationOutcome {
    let span = ctx.operation_span(audit::UPDATE_CAPACITY);

    match StorageUnitService::update_capacity(ctx, location_id, new_capacity)
        .instrument(span)
        .await
    {
        Ok(location) => OperationOutcome::ok(
            format!(
                "Capacity of '{}' set to {}",
                location.full_path, location.folder_capacity
            ),
            Some(location.id),
        ),
        Err(e) => OperationOutcome::from_error(&e),
    }
}

pub async fn handle_delete_unit(ctx: &ExecutionContext, location_id: i64) -> OperationOutcome {
    let span = ctx.operation_span(audit::DELETE_UNIT);

    match StorageUnitService::delete_unit(ctx, location_id)
        .instrument(span)
        .await
    {
        Ok(location) => OperationOutcome::ok(
            format!("Deleted {} '{}'", location.unit_type, location.full_path),
            Some(location.id),
        ),
        Err(e) => OperationOutcome::from_error(&e),
    }
}

/// `id` is the deepest unit created.
pub async fn handle_add_full_hierarchy(
    ctx: &ExecutionContext,
    req: FullHierarchyRequest,
) -> OperationOutcome {
    let span = ctx.operation_span(audit::ADD_FULL_HIERARCHY);

    match HierarchyBulkCreator::add_full_hierarchy(ctx, &req)
        .instrument(span)
        .await
    {
        Ok(created) => match created.last() {
            Some(last) => OperationOutcome::ok(
                format!(
                    "Created {} unit(s) down to '{}'",
                    created.len(),
                    last.full_path
                ),
                Some(last.id),
            ),
            None => OperationOutcome::ok("Nothing to create", None),
        },
        Err(e) => OperationOutcome::from_error(&e),
    }
}

pub async fn handle_remove_file_association(
    ctx: &ExecutionContext,
    file_id: i64,
) -> OperationOutcome {
    let span = ctx.operation_span(audit::REMOVE_FILE_ASSOCIATION);

    match StorageUnitService::remove_file_association(ctx, file_id)
        .instrument(span)
        .await
    {
        Ok(file) => OperationOutcome::ok(
            format!("File '{}' is no longer filed at a location", file.file_name),
            Some(file.id),
        ),
        Err(e) => OperationOutcome::from_error(&e),
    }
}
