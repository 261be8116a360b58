use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scanned document. The hierarchy engine only cares about where it is
/// filed; content and OCR state live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: i64,
    pub department_id: i64,
    pub file_name: String,
    pub storage_location_id: Option<i64>,
    pub uploaded_at: DateTime<Utc>,
}
