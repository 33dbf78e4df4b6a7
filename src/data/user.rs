use document::user::{User, COLLECTION};
use mongodb::{
    bson::doc,
    error::{Error, ErrorKind, WriteFailure},
    Collection, Database,
};

/// Server-side error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// Finds a single user by user name
    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, Error> {
        self.collection
            .find_one(doc! { "userName": user_name })
            .await
    }

    /// Inserts a new user document. Fails with a duplicate-key write error
    /// when the user name is already taken, backed by the unique index
    /// created at startup.
    pub async fn create(&self, user: &User) -> Result<(), Error> {
        self.collection.insert_one(user).await?;

        Ok(())
    }
}

/// Whether the error is a unique-index violation.
///
/// Lets the session service treat a lost check-then-insert race exactly like
/// a failed existence check instead of a store fault.
pub fn is_duplicate_key(error: &Error) -> bool {
    match *error.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}
