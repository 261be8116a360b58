//! Single-unit writes and reads.
//!
//! Each write validates its input, runs in its own transaction and is
//! recorded in the transaction log whether it succeeds or not. A unit's
//! row and its mirror directory are created in the same transaction; if
//! the directory cannot be created the row is rolled back.

use crate::{
    CreateUnitRequest, ExecutionContext, FileAssociationGuard, HierarchyError,
    Result as HierarchyResult, UnitInputValidator, ValidatedUnit, audit, audit::AuditRecorder,
    db_transaction, resolve_target,
};

use dms_core::{
    NewStorageLocation, StorageLocation, StoredFile, UnitType, build_full_path, validate_child,
};
use dms_db::{DepartmentRepository, FileRepository, StorageLocationRepository};

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use log::debug;
use serde::Serialize;
use sqlx::SqliteConnection;

/// How a requested unit type is checked against its parent's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRule {
    /// The child must be exactly one rank below the parent
    NextRank,
    /// Any lower rank is accepted; used by bulk chains that skip ranks
    AnyLowerRank,
}

impl ParentRule {
    #[track_caller]
    pub fn check(self, parent_type: UnitType, requested: UnitType) -> HierarchyResult<()> {
        let allowed = match self {
            Self::NextRank => validate_child(parent_type, requested),
            Self::AnyLowerRank => requested > parent_type,
        };

        if allowed {
            Ok(())
        } else {
            Err(HierarchyError::type_mismatch(parent_type, requested))
        }
    }
}

/// A unit that was inserted and mirrored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedUnit {
    pub id: i64,
    pub unit_type: UnitType,
    pub unit_name: String,
    pub full_path: String,
    pub directory: PathBuf,
}

impl CreatedUnit {
    pub fn summary(&self) -> String {
        format!(
            "Created {} '{}' at {} (id {})",
            self.unit_type, self.unit_name, self.full_path, self.id
        )
    }
}

pub struct StorageUnitService;

impl StorageUnitService {
    pub async fn create_unit(
        ctx: &ExecutionContext,
        req: &CreateUnitRequest,
    ) -> HierarchyResult<CreatedUnit> {
        debug!("{} create_unit starting", ctx.log_prefix());

        let result = Self::try_create_unit(ctx, req).await;

        AuditRecorder::finish(ctx, audit::CREATE_UNIT, result, CreatedUnit::summary).await
    }

    async fn try_create_unit(
        ctx: &ExecutionContext,
        req: &CreateUnitRequest,
    ) -> HierarchyResult<CreatedUnit> {
        // 1. Validate input before touching the store
        let unit = UnitInputValidator::validate_create(req, &ctx.settings)?;

        // 2. Insert and mirror in one transaction
        db_transaction(ctx, audit::CREATE_UNIT, move |mut tx| async move {
            let created = Self::insert_unit(ctx, &mut tx, &unit, ParentRule::NextRank).await?;
            Ok::<_, HierarchyError>((created, tx))
        })
        .await
    }

    /// Inserts one validated unit and creates its directory.
    ///
    /// Must run inside a transaction owned by the caller: on any error the
    /// caller drops the transaction so the insert does not persist.
    pub(crate) async fn insert_unit(
        ctx: &ExecutionContext,
        conn: &mut SqliteConnection,
        unit: &ValidatedUnit,
        rule: ParentRule,
    ) -> HierarchyResult<CreatedUnit> {
        // 1. Department supplies the folder root
        let department = DepartmentRepository::find_by_id(&mut *conn, unit.department_id)
            .await?
            .ok_or_else(|| {
                HierarchyError::not_found(format!("Department {} not found", unit.department_id))
            })?;

        if let Some(sub_department_id) = unit.sub_department_id
            && !DepartmentRepository::sub_department_belongs_to(
                &mut *conn,
                department.id,
                sub_department_id,
            )
            .await?
        {
            return Err(HierarchyError::validation(
                format!(
                    "Sub-department {} does not belong to department {}",
                    sub_department_id, department.id
                ),
                "sub_department_id",
            ));
        }

        // 2. Parent must exist, share the partition and accept this rank
        let parent_path = match unit.parent_id {
            Some(parent_id) => {
                let parent = StorageLocationRepository::find_by_id(&mut *conn, parent_id)
                    .await?
                    .ok_or_else(|| {
                        HierarchyError::not_found(format!(
                            "Parent location {} not found",
                            parent_id
                        ))
                    })?;

                if parent.department_id != unit.department_id
                    || parent.sub_department_id != unit.sub_department_id
                {
                    return Err(HierarchyError::validation(
                        format!(
                            "Parent location {} belongs to a different department or sub-department",
                            parent_id
                        ),
                        "parent_id",
                    ));
                }

                rule.check(parent.unit_type, unit.unit_type)?;
                Some(parent.full_path)
            }
            None => None,
        };

        // 3. Insert the row
        let full_path = build_full_path(parent_path.as_deref(), &unit.unit_name);
        let new_location = NewStorageLocation::new(
            unit.department_id,
            unit.sub_department_id,
            unit.parent_id,
            unit.unit_name.clone(),
            unit.unit_type,
            full_path.clone(),
            unit.folder_capacity,
        );
        let id = StorageLocationRepository::create(&mut *conn, &new_location).await?;

        // 4. Mirror on disk; an error here rolls the insert back
        let directory = resolve_target(&ctx.base_dir, &department.folder_path, &full_path);
        ctx.mirror
            .ensure_dir(&directory)
            .await
            .map_err(|source| HierarchyError::Filesystem {
                path: directory.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(
            "{} Inserted {} '{}' (id {}) at {:?}",
            ctx.log_prefix(),
            unit.unit_type,
            unit.unit_name,
            id,
            directory
        );

        Ok(CreatedUnit {
            id,
            unit_type: unit.unit_type,
            unit_name: unit.unit_name.clone(),
            full_path,
            directory,
        })
    }

    /// Changes the capacity of a folder. Nothing else about the unit changes.
    pub async fn update_capacity(
        ctx: &ExecutionContext,
        location_id: i64,
        new_capacity: i64,
    ) -> HierarchyResult<StorageLocation> {
        debug!("{} update_capacity starting", ctx.log_prefix());

        let result = Self::try_update_capacity(ctx, location_id, new_capacity).await;

        AuditRecorder::finish(ctx, audit::UPDATE_CAPACITY, result, |location| {
            format!(
                "Set capacity of folder '{}' (id {}) to {}",
                location.full_path, location.id, location.folder_capacity
            )
        })
        .await
    }

    async fn try_update_capacity(
        ctx: &ExecutionContext,
        location_id: i64,
        new_capacity: i64,
    ) -> HierarchyResult<StorageLocation> {
        let location_id = UnitInputValidator::validate_id(location_id, "location_id")?;
        let new_capacity = UnitInputValidator::validate_capacity(new_capacity)?;

        db_transaction(ctx, audit::UPDATE_CAPACITY, move |mut tx| async move {
            let mut location = StorageLocationRepository::find_by_id(&mut *tx, location_id)
                .await?
                .ok_or_else(|| {
                    HierarchyError::not_found(format!("Location {} not found", location_id))
                })?;

            if !location.unit_type.is_folder() {
                return Err(HierarchyError::validation(
                    format!(
                        "Only folders have a capacity; location {} is a {}",
                        location_id, location.unit_type
                    ),
                    "location_id",
                ));
            }

            StorageLocationRepository::update_capacity(&mut *tx, location_id, new_capacity)
                .await?;
            location.folder_capacity = new_capacity;

            Ok::<_, HierarchyError>((location, tx))
        })
        .await
    }

    /// Removes a leaf unit. The mirror directory is left on disk.
    pub async fn delete_unit(
        ctx: &ExecutionContext,
        location_id: i64,
    ) -> HierarchyResult<StorageLocation> {
        debug!("{} delete_unit starting", ctx.log_prefix());

        let result = Self::try_delete_unit(ctx, location_id).await;

        AuditRecorder::finish(ctx, audit::DELETE_UNIT, result, |location| {
            format!(
                "Deleted {} '{}' (id {})",
                location.unit_type, location.full_path, location.id
            )
        })
        .await
    }

    async fn try_delete_unit(
        ctx: &ExecutionContext,
        location_id: i64,
    ) -> HierarchyResult<StorageLocation> {
        let location_id = UnitInputValidator::validate_id(location_id, "location_id")?;

        db_transaction(ctx, audit::DELETE_UNIT, move |mut tx| async move {
            let location = StorageLocationRepository::find_by_id(&mut *tx, location_id)
                .await?
                .ok_or_else(|| {
                    HierarchyError::not_found(format!("Location {} not found", location_id))
                })?;

            FileAssociationGuard::ensure_deletable(&mut tx, location_id).await?;

            StorageLocationRepository::delete(&mut *tx, location_id).await?;

            Ok::<_, HierarchyError>((location, tx))
        })
        .await
    }

    /// Clears a file's location. Succeeds for a file that is already unfiled.
    pub async fn remove_file_association(
        ctx: &ExecutionContext,
        file_id: i64,
    ) -> HierarchyResult<StoredFile> {
        debug!("{} remove_file_association starting", ctx.log_prefix());

        let result = Self::try_remove_file_association(ctx, file_id).await;

        AuditRecorder::finish(ctx, audit::REMOVE_FILE_ASSOCIATION, result, |file| {
            match file.storage_location_id {
                Some(location_id) => format!(
                    "Detached file '{}' (id {}) from location {}",
                    file.file_name, file.id, location_id
                ),
                None => format!(
                    "File '{}' (id {}) was not filed anywhere",
                    file.file_name, file.id
                ),
            }
        })
        .await
    }

    async fn try_remove_file_association(
        ctx: &ExecutionContext,
        file_id: i64,
    ) -> HierarchyResult<StoredFile> {
        let file_id = UnitInputValidator::validate_id(file_id, "file_id")?;

        db_transaction(ctx, audit::REMOVE_FILE_ASSOCIATION, move |mut tx| async move {
            let file = FileAssociationGuard::detach_file(&mut tx, file_id).await?;
            Ok::<_, HierarchyError>((file, tx))
        })
        .await
    }

    pub async fn get_location(
        ctx: &ExecutionContext,
        location_id: i64,
    ) -> HierarchyResult<StorageLocation> {
        let location_id = UnitInputValidator::validate_id(location_id, "location_id")?;

        StorageLocationRepository::find_by_id(&ctx.pool, location_id)
            .await?
            .ok_or_else(|| HierarchyError::not_found(format!("Location {} not found", location_id)))
    }

    /// Files filed directly at `location_id`, ordered by file name.
    pub async fn list_files_at(
        ctx: &ExecutionContext,
        location_id: i64,
    ) -> HierarchyResult<Vec<StoredFile>> {
        let location = Self::get_location(ctx, location_id).await?;

        let files = FileRepository::find_by_location(&ctx.pool, location.id).await?;

        debug!(
            "{} {} file(s) at '{}'",
            ctx.log_prefix(),
            files.len(),
            location.full_path
        );

        Ok(files)
    }
}
