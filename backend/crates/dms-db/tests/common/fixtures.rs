#![allow(dead_code)]

use dms_core::{NewStorageLocation, UnitType, build_full_path};

/// Creates an insert payload for a root location of the main department
pub fn root_location(department_id: i64, name: &str, unit_type: UnitType) -> NewStorageLocation {
    NewStorageLocation::new(
        department_id,
        None,
        None,
        name.to_string(),
        unit_type,
        build_full_path(None, name),
        0,
    )
}

/// Creates an insert payload for a child of `parent_id` whose path is `parent_path`
pub fn child_location(
    department_id: i64,
    parent_id: i64,
    parent_path: &str,
    name: &str,
    unit_type: UnitType,
) -> NewStorageLocation {
    NewStorageLocation::new(
        department_id,
        None,
        Some(parent_id),
        name.to_string(),
        unit_type,
        build_full_path(Some(parent_path), name),
        if unit_type.is_folder() { 10 } else { 0 },
    )
}
