use mongodb::{
    bson::doc,
    options::{ClientOptions, IndexOptions},
    Client, Database, IndexModel,
};

use crate::{config::Config, error::AppError};

/// Connects to the MongoDB deployment and selects the application database.
///
/// Parses the connection string from configuration, builds a client, and
/// issues a ping so an unreachable deployment fails startup instead of the
/// first request. The driver otherwise connects lazily.
///
/// # Arguments
/// - `config` - Application configuration containing the connection string
///   and database name
///
/// # Returns
/// - `Ok(Database)` - Connected database handle
/// - `Err(AppError::StoreErr)` - Failed to parse the connection string or
///   reach the deployment
pub async fn connect_to_database(config: &Config) -> Result<Database, AppError> {
    let options = ClientOptions::parse(&config.database_url).await?;
    let client = Client::with_options(options)?;

    let db = client.database(&config.database_name);
    db.run_command(doc! { "ping": 1 }).await?;

    Ok(db)
}

/// Creates the indexes the application relies on.
///
/// The users collection carries a unique index on `userName` so that two
/// concurrent sign-ups for the same name cannot both insert; the losing
/// write surfaces as a duplicate-key error the session service translates
/// into the same rejection as the pre-insert existence check.
///
/// # Arguments
/// - `db` - Database handle to create indexes on
///
/// # Returns
/// - `Ok(())` - Indexes exist
/// - `Err(AppError::StoreErr)` - Index creation failed
pub async fn ensure_indexes(db: &Database) -> Result<(), AppError> {
    let index = IndexModel::builder()
        .keys(doc! { "userName": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();

    db.collection::<document::user::User>(document::user::COLLECTION)
        .create_index(index)
        .await?;

    Ok(())
}
