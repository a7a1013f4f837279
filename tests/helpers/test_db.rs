#![allow(dead_code)]
use storefront::bootstrap::build_app_state;
use storefront::config::{Config, DEFAULT_ADMIN_PAGE_SIZE_CAP};
use storefront::infrastructure::http::middleware::AppState;
use storefront::infrastructure::persistence::Database;

/// Migrated SQLite file that is removed again when the test ends
pub struct TestDatabase {
    db: Database,
    path: String,
}

impl TestDatabase {
    pub fn db(&self) -> Database {
        self.db.clone()
    }

    /// Services and admins wired against this database
    pub fn state(&self) -> AppState {
        build_app_state(self.db(), &test_config())
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", self.path, suffix));
        }
    }
}

pub async fn setup_test_db() -> TestDatabase {
    // Install drivers for AnyPool (required for tests)
    sqlx::any::install_default_drivers();

    // File-based SQLite, one file per test so tests can run in parallel
    use uuid::Uuid;
    let path = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", path);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    TestDatabase { db, path }
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        otel_exporter_endpoint: None,
        service_name: "storefront-test".to_string(),
        metrics_port: 0,
        admin_page_size_cap: DEFAULT_ADMIN_PAGE_SIZE_CAP,
    }
}
