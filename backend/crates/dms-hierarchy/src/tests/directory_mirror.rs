use crate::{DirectoryMirror, LocalDirectoryMirror, resolve_target};

use std::path::{Path, PathBuf};

use tempfile::TempDir;

#[test]
fn given_root_path_when_resolving_then_joins_base_department_and_name() {
    let target = resolve_target(Path::new("/srv/storage"), "finance", "Lab1");

    assert_eq!(target, PathBuf::from("/srv/storage/finance/Lab1"));
}

#[test]
fn given_nested_path_when_resolving_then_each_segment_is_a_directory() {
    let target = resolve_target(Path::new("/srv/storage"), "finance", "Lab1/A/Shelf2");

    assert_eq!(target, PathBuf::from("/srv/storage/finance/Lab1/A/Shelf2"));
}

#[test]
fn given_absolute_department_folder_when_resolving_then_stays_under_base() {
    let target = resolve_target(Path::new("/srv/storage"), "/departments/hr/", "Lab1");

    assert_eq!(target, PathBuf::from("/srv/storage/departments/hr/Lab1"));
}

#[test]
fn given_parent_segments_in_department_folder_when_resolving_then_ignored() {
    let target = resolve_target(Path::new("/srv/storage"), "../../etc", "Lab1");

    assert!(target.starts_with("/srv/storage"));
    assert_eq!(target, PathBuf::from("/srv/storage/etc/Lab1"));
}

#[tokio::test]
async fn given_missing_directories_when_ensure_dir_then_created_recursively() {
    let base = TempDir::new().unwrap();
    let target = resolve_target(base.path(), "finance", "Lab1/A/Shelf2");

    LocalDirectoryMirror.ensure_dir(&target).await.unwrap();

    assert!(target.is_dir());
}

#[tokio::test]
async fn given_existing_directory_when_ensure_dir_then_succeeds() {
    let base = TempDir::new().unwrap();
    let target = base.path().join("finance").join("Lab1");
    std::fs::create_dir_all(&target).unwrap();

    let result = LocalDirectoryMirror.ensure_dir(&target).await;

    assert!(result.is_ok());
    assert!(target.is_dir());
}
