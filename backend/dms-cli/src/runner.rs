use crate::{CliResult, Commands};

use dms_db::TransactionLogRepository;
use dms_hierarchy::{
    CreateUnitRequest, ExecutionContext, FullHierarchyRequest, LocationForest, OperationOutcome,
    StorageUnitService, TreeAssembler, handle_add_full_hierarchy, handle_create_unit,
    handle_delete_unit, handle_remove_file_association, handle_update_capacity,
};

use std::fmt::Write;

use log::debug;
use serde::Serialize;
use serde_json::Value;

/// What one command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Result of a write, or of a read that failed
    Outcome(OperationOutcome),
    Json(Value),
    Tree(LocationTreeView),
}

/// Tree output rendered either as nested JSON or as an indented outline.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationTreeView {
    pub json: Value,
    pub outline: String,
}

impl CommandOutput {
    pub fn succeeded(&self) -> bool {
        match self {
            Self::Outcome(outcome) => outcome.success,
            Self::Json(_) | Self::Tree(_) => true,
        }
    }

    pub fn render(&self, pretty: bool) -> CliResult<String> {
        let rendered = match self {
            Self::Tree(view) if pretty => view.outline.clone(),
            Self::Tree(view) => serde_json::to_string(&view.json)?,
            Self::Outcome(outcome) => to_json(outcome, pretty)?,
            Self::Json(value) => to_json(value, pretty)?,
        };

        Ok(rendered)
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    Ok(json)
}

/// Runs one command against an already opened store.
pub async fn run(command: Commands, ctx: &ExecutionContext) -> CliResult<CommandOutput> {
    debug!("{} Running {:?}", ctx.log_prefix(), command);

    let output = match command {
        Commands::CreateUnit {
            department_id,
            sub_department_id,
            parent_id,
            unit_type,
            name,
            capacity,
        } => {
            let req = CreateUnitRequest {
                department_id,
                sub_department_id,
                parent_id,
                unit_type,
                unit_name: name,
                folder_capacity: capacity,
            };
            CommandOutput::Outcome(handle_create_unit(ctx, req).await)
        }

        Commands::UpdateCapacity {
            location_id,
            capacity,
        } => CommandOutput::Outcome(handle_update_capacity(ctx, location_id, capacity).await),

        Commands::DeleteUnit { location_id } => {
            CommandOutput::Outcome(handle_delete_unit(ctx, location_id).await)
        }

        Commands::AddHierarchy {
            department_id,
            sub_department_id,
            room,
            cabinet,
            layer,
            box_name,
            folder,
            capacity,
        } => {
            let req = FullHierarchyRequest {
                department_id,
                sub_department_id,
                room_name: room,
                cabinet_name: cabinet,
                layer_name: layer,
                box_name,
                folder_name: folder,
                folder_capacity: capacity,
            };
            CommandOutput::Outcome(handle_add_full_hierarchy(ctx, req).await)
        }

        Commands::DetachFile { file_id } => {
            CommandOutput::Outcome(handle_remove_file_association(ctx, file_id).await)
        }

        Commands::Tree {
            department_id,
            sub_department_id,
        } => match TreeAssembler::build_tree(ctx, department_id, sub_department_id).await {
            Ok(forest) => CommandOutput::Tree(LocationTreeView {
                json: serde_json::to_value(forest.to_nested())?,
                outline: outline(&forest),
            }),
            Err(e) => CommandOutput::Outcome(OperationOutcome::from_error(&e)),
        },

        Commands::Files { location_id } => {
            match StorageUnitService::list_files_at(ctx, location_id).await {
                Ok(files) => CommandOutput::Json(serde_json::to_value(files)?),
                Err(e) => CommandOutput::Outcome(OperationOutcome::from_error(&e)),
            }
        }

        Commands::Log { limit } => {
            let entries = TransactionLogRepository::find_recent(&ctx.pool, limit.max(1)).await?;
            CommandOutput::Json(serde_json::to_value(entries)?)
        }
    };

    Ok(output)
}

/// Two spaces per level, e.g. `  cabinet A (#2)`.
pub fn outline(forest: &LocationForest) -> String {
    let mut text = String::new();

    for (depth, node) in forest.walk_depth_first() {
        let location = &node.location;
        let _ = write!(
            text,
            "{:indent$}{} {} (#{})",
            "",
            location.unit_type,
            location.unit_name,
            location.id,
            indent = depth * 2
        );
        if location.unit_type.is_folder() {
            let _ = write!(text, " capacity {}", location.folder_capacity);
        }
        text.push('\n');
    }

    text
}
