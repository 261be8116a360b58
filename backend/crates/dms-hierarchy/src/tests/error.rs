use crate::HierarchyError;

use dms_core::UnitType;
use dms_db::DbError;

use std::path::PathBuf;

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, not};

#[test]
fn given_cabinet_parent_when_folder_requested_then_message_names_layer() {
    let error = HierarchyError::type_mismatch(UnitType::Cabinet, UnitType::Folder);

    assert_that!(error.error_code(), eq("TYPE_MISMATCH"));
    assert_that!(error.user_message(), contains_substring("only a layer can"));
    assert_that!(error.user_message(), contains_substring("a folder cannot be placed in a cabinet"));
}

#[test]
fn given_folder_parent_when_anything_requested_then_message_says_terminal() {
    let error = HierarchyError::type_mismatch(UnitType::Folder, UnitType::Box);

    assert_that!(
        error.user_message(),
        contains_substring("a folder cannot contain other storage units")
    );
}

#[test]
fn given_each_variant_when_error_code_then_stable_code() {
    let sqlx_error = sqlx::Error::RowNotFound;
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");

    assert_that!(
        HierarchyError::validation("bad", "unit_name").error_code(),
        eq("VALIDATION_ERROR")
    );
    assert_that!(HierarchyError::not_found("gone").error_code(), eq("NOT_FOUND"));
    assert_that!(HierarchyError::conflict("busy").error_code(), eq("CONFLICT"));
    assert_that!(
        HierarchyError::from(sqlx_error).error_code(),
        eq("DATABASE_ERROR")
    );
    assert_that!(
        HierarchyError::Filesystem {
            path: PathBuf::from("/srv/storage/x"),
            source: io_error,
            location: dms_core::ErrorLocation::from(std::panic::Location::caller()),
        }
        .error_code(),
        eq("FILESYSTEM_ERROR")
    );
}

#[test]
fn given_database_error_when_user_message_then_raw_text_hidden() {
    let error = HierarchyError::from(DbError::Migration {
        message: "SQLITE_CONSTRAINT: NOT NULL constraint failed: storage_locations.full_path"
            .to_string(),
        location: dms_core::ErrorLocation::from(std::panic::Location::caller()),
    });

    assert_that!(error.user_message(), not(contains_substring("SQLITE")));
    assert_that!(error.user_message(), contains_substring("no changes were saved"));
    assert_that!(error.to_string(), contains_substring("SQLITE_CONSTRAINT"));
}

#[test]
fn given_filesystem_error_when_user_message_then_path_hidden() {
    let error = HierarchyError::Filesystem {
        path: PathBuf::from("/home/archive/storage/Finance/Lab1"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        location: dms_core::ErrorLocation::from(std::panic::Location::caller()),
    };

    assert_that!(error.user_message(), not(contains_substring("/home")));
    assert_that!(error.to_string(), contains_substring("Finance"));
}

#[test]
fn given_validation_error_when_matched_then_field_recorded() {
    let error = HierarchyError::validation("unit_name cannot be empty", "unit_name");

    match error {
        HierarchyError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("unit_name"));
            assert_eq!(message, "unit_name cannot be empty");
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}
