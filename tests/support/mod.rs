//! Embedded PostgreSQL for store tests.
//!
//! Each context gets its own temporary database on a fresh cluster. When the
//! cluster cannot start (no binaries, no network) the tests print a
//! `SKIP-TEST-CLUSTER` marker and return, unless `REQUIRE_TEST_CLUSTER` is
//! truthy, in which case setup failure fails the test.

use pg_embedded_setup_unpriv::{TemporaryDatabase, TestCluster};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::runtime::Runtime;
use user_api::PgUserStore;

static NEXT_DATABASE: AtomicUsize = AtomicUsize::new(0);

/// Field order is drop order: the pool closes before its database and cluster go away.
pub struct PgContext {
    pub store: PgUserStore,
    _database: TemporaryDatabase,
    pub cluster: TestCluster,
    pub runtime: Runtime,
}

impl Drop for PgContext {
    fn drop(&mut self) {
        self.runtime.block_on(self.store.close());
    }
}

pub fn require_test_cluster() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if require_test_cluster() {
        panic!("Test cluster setup failed: {reason}");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}

/// Database name unique within this test binary run.
pub fn unique_database_name(prefix: &str) -> String {
    format!(
        "{prefix}_{}_{}",
        std::process::id(),
        NEXT_DATABASE.fetch_add(1, Ordering::Relaxed)
    )
}

pub fn setup_context() -> Result<PgContext, String> {
    let cluster = TestCluster::new().map_err(|err| format!("{err:?}"))?;
    let database = cluster
        .temporary_database(unique_database_name("user_api_store").as_str())
        .map_err(|err| format!("{err:?}"))?;
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let url = database.url().to_string();
    let store = runtime
        .block_on(async {
            let store = PgUserStore::connect(&url, 2).await?;
            store.ensure_schema().await?;
            Ok::<_, user_api::StoreError>(store)
        })
        .map_err(|err| err.to_string())?;
    Ok(PgContext {
        store,
        _database: database,
        cluster,
        runtime,
    })
}
