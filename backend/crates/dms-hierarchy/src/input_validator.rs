use crate::{CreateUnitRequest, HierarchyError, Result as HierarchyResult};

use dms_config::HierarchyConfig;
use dms_core::UnitType;

use std::str::FromStr;

/// Input that passed validation and can be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUnit {
    pub department_id: i64,
    pub sub_department_id: Option<i64>,
    pub parent_id: Option<i64>,
    pub unit_type: UnitType,
    /// Trimmed
    pub unit_name: String,
    /// 0 unless `unit_type` is a folder
    pub folder_capacity: i64,
}

/// Validates caller input before any transaction is opened
pub struct UnitInputValidator;

impl UnitInputValidator {
    #[track_caller]
    pub fn validate_create(
        req: &CreateUnitRequest,
        settings: &HierarchyConfig,
    ) -> HierarchyResult<ValidatedUnit> {
        let department_id = Self::validate_id(req.department_id, "department_id")?;
        let sub_department_id = Self::validate_optional_id(req.sub_department_id, "sub_department_id")?;
        let parent_id = Self::validate_optional_id(req.parent_id, "parent_id")?;
        let unit_type = Self::validate_unit_type(&req.unit_type)?;
        let unit_name = Self::validate_unit_name(&req.unit_name, settings.max_unit_name_length)?;

        let folder_capacity = if unit_type.is_folder() {
            match req.folder_capacity {
                Some(capacity) => Self::validate_capacity(capacity)?,
                None => {
                    return Err(HierarchyError::validation(
                        "folder_capacity is required for folders",
                        "folder_capacity",
                    ));
                }
            }
        } else {
            0
        };

        Ok(ValidatedUnit {
            department_id,
            sub_department_id,
            parent_id,
            unit_type,
            unit_name,
            folder_capacity,
        })
    }

    #[track_caller]
    pub fn validate_id(value: i64, field: &str) -> HierarchyResult<i64> {
        if value <= 0 {
            return Err(HierarchyError::validation(
                format!("{field} must be a positive id"),
                field,
            ));
        }

        Ok(value)
    }

    #[track_caller]
    pub fn validate_optional_id(value: Option<i64>, field: &str) -> HierarchyResult<Option<i64>> {
        value.map(|id| Self::validate_id(id, field)).transpose()
    }

    #[track_caller]
    pub fn validate_unit_type(value: &str) -> HierarchyResult<UnitType> {
        UnitType::from_str(value).map_err(|_| {
            HierarchyError::validation(
                format!(
                    "unit_type must be one of room, cabinet, layer, box, folder (got '{}')",
                    value.trim()
                ),
                "unit_type",
            )
        })
    }

    /// Trims the name and checks it can be used as one path segment.
    #[track_caller]
    pub fn validate_unit_name(name: &str, max_length: usize) -> HierarchyResult<String> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(HierarchyError::validation(
                "unit_name cannot be empty",
                "unit_name",
            ));
        }

        if trimmed.chars().count() > max_length {
            return Err(HierarchyError::validation(
                format!("unit_name must not exceed {max_length} characters"),
                "unit_name",
            ));
        }

        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(HierarchyError::validation(
                "unit_name cannot contain path separators",
                "unit_name",
            ));
        }

        if trimmed == "." || trimmed == ".." {
            return Err(HierarchyError::validation(
                "unit_name cannot be '.' or '..'",
                "unit_name",
            ));
        }

        Ok(trimmed.to_string())
    }

    #[track_caller]
    pub fn validate_capacity(value: i64) -> HierarchyResult<i64> {
        if value <= 0 {
            return Err(HierarchyError::validation(
                "folder_capacity must be greater than 0",
                "folder_capacity",
            ));
        }

        Ok(value)
    }

    pub fn is_blank(value: Option<&str>) -> bool {
        value.is_none_or(|v| v.trim().is_empty())
    }
}
