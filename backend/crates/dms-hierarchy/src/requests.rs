use serde::{Deserialize, Serialize};

/// Caller input for a single storage unit.
///
/// `unit_type` arrives as text and is parsed during validation so that an
/// unknown rank is reported like any other bad input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUnitRequest {
    pub department_id: i64,
    pub sub_department_id: Option<i64>,
    pub parent_id: Option<i64>,
    pub unit_type: String,
    pub unit_name: String,
    /// Required and positive for folders, ignored otherwise
    pub folder_capacity: Option<i64>,
}

/// One name per rank; blank ranks are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FullHierarchyRequest {
    pub department_id: i64,
    pub sub_department_id: Option<i64>,
    pub room_name: Option<String>,
    pub cabinet_name: Option<String>,
    pub layer_name: Option<String>,
    pub box_name: Option<String>,
    pub folder_name: Option<String>,
    /// Applies to the folder rank; the configured default when absent
    pub folder_capacity: Option<i64>,
}
