//! Physical location hierarchy engine.
//!
//! Keeps the Room > Cabinet > Layer > Box > Folder tree consistent between
//! the SQLite store and the directory mirror under the storage base
//! directory. Writes go through [`StorageUnitService`] and
//! [`HierarchyBulkCreator`]; [`handlers`] wraps them in the uniform
//! [`OperationOutcome`] returned to callers.

pub mod audit;
pub mod bulk_creator;
pub mod context;
pub mod db_ops;
pub mod directory_mirror;
pub mod error;
pub mod file_association_guard;
pub mod handlers;
pub mod input_validator;
pub mod outcome;
pub mod requests;
pub mod storage_unit_service;
pub mod tree_assembler;

#[cfg(test)]
mod tests;

pub use bulk_creator::HierarchyBulkCreator;
pub use context::ExecutionContext;
pub use db_ops::db_transaction;
pub use directory_mirror::{DirectoryMirror, LocalDirectoryMirror, resolve_target};
pub use error::{HierarchyError, Result};
pub use file_association_guard::{DeleteBlocker, FileAssociationGuard};
pub use handlers::{
    handle_add_full_hierarchy, handle_create_unit, handle_delete_unit,
    handle_remove_file_association, handle_update_capacity,
};
pub use input_validator::{UnitInputValidator, ValidatedUnit};
pub use outcome::OperationOutcome;
pub use requests::{CreateUnitRequest, FullHierarchyRequest};
pub use storage_unit_service::{CreatedUnit, ParentRule, StorageUnitService};
pub use tree_assembler::{Breadcrumb, LocationForest, NestedNode, TreeAssembler, TreeNode};
