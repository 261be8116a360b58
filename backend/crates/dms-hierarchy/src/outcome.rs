use crate::HierarchyError;

use serde::{Deserialize, Serialize};

/// Result shape returned across the engine boundary for every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl OperationOutcome {
    pub fn ok<S: Into<String>>(message: S, id: Option<i64>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id,
        }
    }

    pub fn failed<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
        }
    }

    /// Never carries store or filesystem error text.
    pub fn from_error(error: &HierarchyError) -> Self {
        Self::failed(error.user_message())
    }
}
