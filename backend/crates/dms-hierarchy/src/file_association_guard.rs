use crate::{HierarchyError, Result as HierarchyResult};

use dms_core::StoredFile;
use dms_db::{FileRepository, StorageLocationRepository};

use sqlx::SqliteConnection;

/// Why a location may not be deleted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteBlocker {
    /// Number of direct child locations
    HasChildren(i64),
    /// Number of files filed directly at the location
    HasFiles(i64),
}

impl DeleteBlocker {
    pub fn describe(&self, location_id: i64) -> String {
        match self {
            Self::HasChildren(count) => format!(
                "Location {} has child locations ({}); delete them first",
                location_id, count
            ),
            Self::HasFiles(count) => format!(
                "Location {} has associated files ({}); detach them first",
                location_id, count
            ),
        }
    }
}

/// Leaf-only delete policy and the file detach operation.
///
/// Only direct children and directly filed documents block a delete;
/// deeper descendants are reached by deleting bottom-up.
pub struct FileAssociationGuard;

impl FileAssociationGuard {
    /// Children are checked before files.
    pub async fn find_blocker(
        conn: &mut SqliteConnection,
        location_id: i64,
    ) -> HierarchyResult<Option<DeleteBlocker>> {
        let children = StorageLocationRepository::count_children(&mut *conn, location_id).await?;
        if children > 0 {
            return Ok(Some(DeleteBlocker::HasChildren(children)));
        }

        let files = FileRepository::count_by_location(&mut *conn, location_id).await?;
        if files > 0 {
            return Ok(Some(DeleteBlocker::HasFiles(files)));
        }

        Ok(None)
    }

    pub async fn ensure_deletable(
        conn: &mut SqliteConnection,
        location_id: i64,
    ) -> HierarchyResult<()> {
        match Self::find_blocker(conn, location_id).await? {
            Some(blocker) => Err(HierarchyError::conflict(blocker.describe(location_id))),
            None => Ok(()),
        }
    }

    /// Clears the file's location and returns the file as it was before.
    pub async fn detach_file(
        conn: &mut SqliteConnection,
        file_id: i64,
    ) -> HierarchyResult<StoredFile> {
        let file = FileRepository::find_by_id(&mut *conn, file_id)
            .await?
            .ok_or_else(|| HierarchyError::not_found(format!("File {} not found", file_id)))?;

        if file.storage_location_id.is_some() {
            FileRepository::clear_location(&mut *conn, file_id).await?;
        }

        Ok(file)
    }
}
