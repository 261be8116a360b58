use crate::models::unit_type::UnitType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A physical place where paper documents live.
///
/// `parent_id` is a plain foreign key. Parent/child structure is rebuilt
/// from it on every read and never stored as references between values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageLocation {
    pub id: i64,

    // Ownership
    pub department_id: i64,
    pub sub_department_id: Option<i64>,

    // Hierarchy
    pub parent_id: Option<i64>,
    pub unit_name: String,
    pub unit_type: UnitType,
    pub full_path: String,

    /// Only meaningful for folders; 0 for every other rank.
    pub folder_capacity: i64,

    pub created_at: DateTime<Utc>,
}

/// Row payload for an insert; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStorageLocation {
    pub department_id: i64,
    pub sub_department_id: Option<i64>,
    pub parent_id: Option<i64>,
    pub unit_name: String,
    pub unit_type: UnitType,
    pub full_path: String,
    pub folder_capacity: i64,
    pub created_at: DateTime<Utc>,
}

impl NewStorageLocation {
    /// Builds an insert payload. The capacity is forced to 0 for anything
    /// that is not a folder.
    pub fn new(
        department_id: i64,
        sub_department_id: Option<i64>,
        parent_id: Option<i64>,
        unit_name: String,
        unit_type: UnitType,
        full_path: String,
        folder_capacity: i64,
    ) -> Self {
        Self {
            department_id,
            sub_department_id,
            parent_id,
            unit_name,
            unit_type,
            full_path,
            folder_capacity: if unit_type.is_folder() {
                folder_capacity
            } else {
                0
            },
            created_at: Utc::now(),
        }
    }
}
