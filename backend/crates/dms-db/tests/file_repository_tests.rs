mod common;

use common::{create_test_department, create_test_file, create_test_pool, root_location};

use dms_core::UnitType;
use dms_db::{FileRepository, StorageLocationRepository};

use googletest::prelude::*;

#[tokio::test]
async fn given_files_at_location_when_counting_then_returns_count() {
    // Given: A folder with two files and one unfiled document
    let pool = create_test_pool().await;
    let dept = create_test_department(&pool, "Finance", "finance").await;
    let folder = StorageLocationRepository::create(&pool, &root_location(dept, "F1", UnitType::Folder))
        .await
        .unwrap();
    create_test_file(&pool, dept, "b.pdf", Some(folder)).await;
    create_test_file(&pool, dept, "a.pdf", Some(folder)).await;
    create_test_file(&pool, dept, "loose.pdf", None).await;

    // When
    let count = FileRepository::count_by_location(&pool, folder).await.unwrap();
    let files = FileRepository::find_by_location(&pool, folder).await.unwrap();

    // Then: ordered by file name
    assert_that!(count, eq(2));
    assert_that!(files, len(eq(2)));
    assert_that!(files[0].file_name, eq("a.pdf"));
    assert_that!(files[1].file_name, eq("b.pdf"));
}

#[tokio::test]
async fn given_filed_document_when_location_cleared_then_file_is_unfiled() {
    let pool = create_test_pool().await;
    let dept = create_test_department(&pool, "Finance", "finance").await;
    let folder = StorageLocationRepository::create(&pool, &root_location(dept, "F1", UnitType::Folder))
        .await
        .unwrap();
    let file = create_test_file(&pool, dept, "a.pdf", Some(folder)).await;

    let touched = FileRepository::clear_location(&pool, file).await.unwrap();

    assert_that!(touched, eq(1));
    let found = FileRepository::find_by_id(&pool, file).await.unwrap().unwrap();
    assert_that!(found.storage_location_id, none());
    assert_that!(
        FileRepository::count_by_location(&pool, folder).await.unwrap(),
        eq(0)
    );
}

#[tokio::test]
async fn given_missing_file_when_clearing_location_then_no_rows_affected() {
    let pool = create_test_pool().await;

    let touched = FileRepository::clear_location(&pool, 5).await.unwrap();

    assert_that!(touched, eq(0));
}
