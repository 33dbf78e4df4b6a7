use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use mongodb::{bson::doc, error::Error, options::ClientOptions, Client, Database};

/// Connection string used when `MONGODB_TEST_URI` is not set.
const DEFAULT_TEST_URI: &str = "mongodb://localhost:27017";

/// How long to wait for server selection before deciding no deployment is
/// reachable. Kept short so suites without a local server skip quickly.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(2);

/// Counter feeding unique database names within one test process.
static NEXT_DATABASE: AtomicU32 = AtomicU32::new(0);

/// Test context owning an isolated database on the test deployment.
///
/// Every context gets its own uniquely named database, so tests never share
/// state and can run concurrently. Call `cleanup()` at the end of the test
/// to drop the database; names include the process id, so anything left
/// behind by an aborted run is identifiable.
pub struct TestContext {
    /// Handle to this test's throwaway database.
    pub db: Database,
}

impl TestContext {
    /// Connects to the test deployment and provisions a fresh database.
    ///
    /// Reads the connection string from `MONGODB_TEST_URI`, falling back to
    /// a local default. Returns `None` when no deployment answers the ping
    /// within the selection timeout, letting callers skip instead of fail.
    ///
    /// # Returns
    /// - `Some(TestContext)` - Context with an isolated database
    /// - `None` - No deployment reachable
    pub async fn new() -> Option<Self> {
        let uri =
            std::env::var("MONGODB_TEST_URI").unwrap_or_else(|_| DEFAULT_TEST_URI.to_string());

        let mut options = ClientOptions::parse(&uri).await.ok()?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options).ok()?;

        if client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .is_err()
        {
            eprintln!("skipping test: no MongoDB deployment reachable at {}", uri);
            return None;
        }

        let name = format!(
            "ensemble_test_{}_{}",
            std::process::id(),
            NEXT_DATABASE.fetch_add(1, Ordering::Relaxed)
        );

        Some(Self {
            db: client.database(&name),
        })
    }

    /// Drops the test database.
    ///
    /// # Returns
    /// - `Ok(())` - Database dropped
    /// - `Err(Error)` - The drop command failed
    pub async fn cleanup(self) -> Result<(), Error> {
        self.db.drop().await
    }
}
