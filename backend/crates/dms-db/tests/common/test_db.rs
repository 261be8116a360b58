#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    dms_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a department and returns its id
pub async fn create_test_department(pool: &SqlitePool, name: &str, folder_path: &str) -> i64 {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query("INSERT INTO departments (name, folder_path) VALUES (?, ?)")
        .bind(name)
        .bind(folder_path)
        .execute(pool)
        .await
        .expect("Failed to create test department")
        .last_insert_rowid()
}

/// Inserts a sub-department and returns its id
pub async fn create_test_sub_department(pool: &SqlitePool, department_id: i64, name: &str) -> i64 {
    sqlx::query("INSERT INTO sub_departments (department_id, name) VALUES (?, ?)")
        .bind(department_id)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to create test sub-department")
        .last_insert_rowid()
}

/// Inserts a file, optionally filed at a location, and returns its id
pub async fn create_test_file(
    pool: &SqlitePool,
    department_id: i64,
    file_name: &str,
    storage_location_id: Option<i64>,
) -> i64 {
    sqlx::query(
        "INSERT INTO files (department_id, file_name, storage_location_id, uploaded_at) VALUES (?, ?, ?, ?)",
    )
    .bind(department_id)
    .bind(file_name)
    .bind(storage_location_id)
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await
    .expect("Failed to create test file")
    .last_insert_rowid()
}
