//! User factory for creating test user documents.
//!
//! The password field stores whatever the test provides; factories never
//! hash. Tests exercising real credential flows go through the session
//! service instead.

use document::user::{User, COLLECTION};
use mongodb::{error::Error, Database};

use crate::factory::helpers::next_id;

/// Factory for creating test users with customizable fields.
pub struct UserFactory<'a> {
    db: &'a Database,
    user_name: String,
    password: String,
    email_address: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - user_name: `"user{id}"` where id is auto-incremented
    /// - password: `"hashed-password-{id}"` (an opaque stand-in, not a
    ///   real hash)
    /// - email_address: `"user{id}@example.com"`
    pub fn new(db: &'a Database) -> Self {
        let id = next_id();
        Self {
            db,
            user_name: format!("user{}", id),
            password: format!("hashed-password-{}", id),
            email_address: format!("user{}@example.com", id),
        }
    }

    /// Sets the user name.
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Sets the stored password value.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the email address.
    pub fn email_address(mut self, email_address: impl Into<String>) -> Self {
        self.email_address = email_address.into();
        self
    }

    /// Builds and inserts the user document.
    pub async fn build(self) -> Result<User, Error> {
        let user = User::new(self.user_name, self.password, self.email_address);

        self.db
            .collection::<User>(COLLECTION)
            .insert_one(&user)
            .await?;

        Ok(user)
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &Database) -> Result<User, Error> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific user name.
pub async fn create_user_with_user_name(
    db: &Database,
    user_name: impl Into<String>,
) -> Result<User, Error> {
    UserFactory::new(db).user_name(user_name).build().await
}
