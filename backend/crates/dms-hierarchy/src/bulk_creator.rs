use crate::{
    CreatedUnit, ExecutionContext, FullHierarchyRequest, HierarchyError, ParentRule,
    Result as HierarchyResult, StorageUnitService, UnitInputValidator, ValidatedUnit, audit,
    audit::AuditRecorder, db_transaction,
};

use dms_core::UnitType;

use log::debug;

/// Creates a whole Room > ... > Folder chain in one transaction.
///
/// Blank ranks are skipped and the next supplied rank is attached to the
/// last unit created, so a chain may jump ranks (Room straight to Folder).
/// Any failure rolls back every unit created by the call.
pub struct HierarchyBulkCreator;

impl HierarchyBulkCreator {
    pub async fn add_full_hierarchy(
        ctx: &ExecutionContext,
        req: &FullHierarchyRequest,
    ) -> HierarchyResult<Vec<CreatedUnit>> {
        debug!("{} add_full_hierarchy starting", ctx.log_prefix());

        let result = Self::try_add_full_hierarchy(ctx, req).await;

        AuditRecorder::finish(ctx, audit::ADD_FULL_HIERARCHY, result, |created| {
            let chain = created
                .iter()
                .map(|unit| unit.id.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            match created.last() {
                Some(last) => format!(
                    "Created hierarchy {} ({} units: {})",
                    last.full_path,
                    created.len(),
                    chain
                ),
                None => "Created empty hierarchy".to_string(),
            }
        })
        .await
    }

    async fn try_add_full_hierarchy(
        ctx: &ExecutionContext,
        req: &FullHierarchyRequest,
    ) -> HierarchyResult<Vec<CreatedUnit>> {
        let chain = Self::validate_chain(ctx, req)?;

        db_transaction(ctx, audit::ADD_FULL_HIERARCHY, move |mut tx| async move {
            let mut created: Vec<CreatedUnit> = Vec::with_capacity(chain.len());

            for mut unit in chain {
                unit.parent_id = created.last().map(|previous| previous.id);
                let inserted =
                    StorageUnitService::insert_unit(ctx, &mut tx, &unit, ParentRule::AnyLowerRank)
                        .await?;
                created.push(inserted);
            }

            Ok::<_, HierarchyError>((created, tx))
        })
        .await
    }

    /// Validates every supplied rank before a transaction is opened.
    /// Parent ids are left unset; they are only known during insertion.
    fn validate_chain(
        ctx: &ExecutionContext,
        req: &FullHierarchyRequest,
    ) -> HierarchyResult<Vec<ValidatedUnit>> {
        let department_id = UnitInputValidator::validate_id(req.department_id, "department_id")?;
        let sub_department_id =
            UnitInputValidator::validate_optional_id(req.sub_department_id, "sub_department_id")?;

        let ranks = [
            (UnitType::Room, req.room_name.as_deref()),
            (UnitType::Cabinet, req.cabinet_name.as_deref()),
            (UnitType::Layer, req.layer_name.as_deref()),
            (UnitType::Box, req.box_name.as_deref()),
            (UnitType::Folder, req.folder_name.as_deref()),
        ];

        let mut chain = Vec::new();

        for (unit_type, name) in ranks {
            let Some(name) = name.filter(|n| !UnitInputValidator::is_blank(Some(*n))) else {
                continue;
            };

            let unit_name =
                UnitInputValidator::validate_unit_name(name, ctx.settings.max_unit_name_length)?;

            let folder_capacity = if unit_type.is_folder() {
                UnitInputValidator::validate_capacity(
                    req.folder_capacity
                        .unwrap_or(ctx.settings.default_folder_capacity),
                )?
            } else {
                0
            };

            chain.push(ValidatedUnit {
                department_id,
                sub_department_id,
                parent_id: None,
                unit_type,
                unit_name,
                folder_capacity,
            });
        }

        if chain.is_empty() {
            return Err(HierarchyError::validation(
                "At least one unit name is required",
                "room_name",
            ));
        }

        Ok(chain)
    }
}
