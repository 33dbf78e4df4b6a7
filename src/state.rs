//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources
//! needed by the application. The state is initialized once during startup and
//! then cloned for each request handler through Axum's state extraction.

use mongodb::Database;

/// Application state containing shared resources.
///
/// Holds the document store handle every handler operates on. It is
/// initialized once during server startup and then cloned (cheaply, the
/// driver handle is reference-counted internally) for each incoming request
/// via Axum's state extraction. Passing the handle explicitly keeps the
/// store out of ambient global state.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the application's database on the MongoDB deployment.
    ///
    /// Shared across all requests; the driver manages its own connection
    /// pooling behind this handle.
    pub db: Database,
}

impl AppState {
    /// Creates a new application state with the provided store handle.
    ///
    /// # Arguments
    /// - `db` - Database handle produced during startup
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}
