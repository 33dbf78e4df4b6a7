//! Composer factory for creating test composer documents.

use document::composer::{Composer, COLLECTION};
use mongodb::{error::Error, Database};

use crate::factory::helpers::next_id;

/// Factory for creating test composers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let composer = ComposerFactory::new(&db)
///     .first_name("Johann")
///     .last_name("Bach")
///     .build()
///     .await?;
/// ```
pub struct ComposerFactory<'a> {
    db: &'a Database,
    first_name: String,
    last_name: String,
}

impl<'a> ComposerFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Composer {id}"` where id is auto-incremented
    /// - last_name: `"Smith"`
    pub fn new(db: &'a Database) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Composer {}", id),
            last_name: "Smith".to_string(),
        }
    }

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Builds and inserts the composer document.
    ///
    /// # Returns
    /// - `Ok(Composer)` - The inserted document
    /// - `Err(Error)` - Store error during insert
    pub async fn build(self) -> Result<Composer, Error> {
        let composer = Composer::new(self.first_name, self.last_name);

        self.db
            .collection::<Composer>(COLLECTION)
            .insert_one(&composer)
            .await?;

        Ok(composer)
    }
}

/// Creates a composer with default values.
///
/// Shorthand for `ComposerFactory::new(db).build().await`.
pub async fn create_composer(db: &Database) -> Result<Composer, Error> {
    ComposerFactory::new(db).build().await
}
