use dms_core::{LogStatus, TransactionLog, UnitType};
use dms_db::{StorageLocationRepository, TransactionLogRepository};
use dms_hierarchy::{CreateUnitRequest, DirectoryMirror, ExecutionContext, StorageUnitService};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

pub const TEST_ACTOR_ID: i64 = 42;
pub const DEPARTMENT_FOLDER: &str = "finance";

/// In-memory store, a temporary storage base directory and one department.
pub struct TestEnv {
    pub pool: SqlitePool,
    pub base: TempDir,
    pub department_id: i64,
    pub ctx: ExecutionContext,
    /// Holds the database file for file-backed environments
    db_dir: Option<TempDir>,
}

impl TestEnv {
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        Self::with_pool(pool, None).await
    }

    /// File-backed WAL store with a pool of `max_connections`, so writes
    /// from concurrent tasks really run on separate connections.
    pub async fn file_backed(max_connections: u32) -> Self {
        let db_dir = TempDir::new().expect("Failed to create temp db dir");
        let pool = dms_db::open_pool(&db_dir.path().join("dms.sqlite"), max_connections)
            .await
            .expect("Failed to open file-backed pool");
        Self::with_pool(pool, Some(db_dir)).await
    }

    async fn with_pool(pool: SqlitePool, db_dir: Option<TempDir>) -> Self {
        let base = TempDir::new().expect("Failed to create temp storage dir");
        let department_id = create_test_department(&pool, "Finance", DEPARTMENT_FOLDER).await;
        let ctx = ExecutionContext::new(TEST_ACTOR_ID, pool.clone(), base.path());

        Self {
            pool,
            base,
            department_id,
            ctx,
            db_dir,
        }
    }

    pub fn with_mirror(mut self, mirror: Arc<dyn DirectoryMirror>) -> Self {
        self.ctx = self.ctx.clone().with_mirror(mirror);
        self
    }

    /// Directory a unit with `full_path` is mirrored to
    pub fn dir_of(&self, full_path: &str) -> PathBuf {
        full_path
            .split('/')
            .fold(self.base.path().join(DEPARTMENT_FOLDER), |dir, segment| {
                dir.join(segment)
            })
    }

    pub fn base_path(&self) -> &Path {
        self.base.path()
    }

    pub async fn location_count(&self) -> i64 {
        StorageLocationRepository::count_all(&self.pool)
            .await
            .expect("Failed to count locations")
    }

    /// Audit records, oldest first
    pub async fn audit_entries(&self) -> Vec<TransactionLog> {
        let mut entries = TransactionLogRepository::find_recent(&self.pool, 100)
            .await
            .expect("Failed to read transaction log");
        entries.reverse();
        entries
    }

    pub async fn last_audit(&self) -> TransactionLog {
        self.audit_entries()
            .await
            .pop()
            .expect("No transaction log entries")
    }

    /// Creates a unit in the main department and returns its id
    pub async fn create(&self, parent_id: Option<i64>, unit_type: UnitType, name: &str) -> i64 {
        let req = unit_request(self.department_id, parent_id, unit_type, name);
        StorageUnitService::create_unit(&self.ctx, &req)
            .await
            .expect("Failed to create unit")
            .id
    }
}

pub fn unit_request(
    department_id: i64,
    parent_id: Option<i64>,
    unit_type: UnitType,
    name: &str,
) -> CreateUnitRequest {
    CreateUnitRequest {
        department_id,
        sub_department_id: None,
        parent_id,
        unit_type: unit_type.as_str().to_string(),
        unit_name: name.to_string(),
        folder_capacity: unit_type.is_folder().then_some(10),
    }
}

pub fn is_failure(entry: &TransactionLog) -> bool {
    entry.status == LogStatus::Failure
}

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

pub async fn create_test_department(pool: &SqlitePool, name: &str, folder_path: &str) -> i64 {
    sqlx::query("INSERT INTO departments (name, folder_path) VALUES (?, ?)")
        .bind(name)
        .bind(folder_path)
        .execute(pool)
        .await
        .expect("Failed to create test department")
        .last_insert_rowid()
}

pub async fn create_test_sub_department(pool: &SqlitePool, department_id: i64, name: &str) -> i64 {
    sqlx::query("INSERT INTO sub_departments (department_id, name) VALUES (?, ?)")
        .bind(department_id)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to create test sub-department")
        .last_insert_rowid()
}

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
