use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Name of the collection user documents are stored in.
pub const COLLECTION: &str = "users";

/// A registered user.
///
/// `password` holds the PHC-encoded Argon2id hash of the user's password,
/// never the plaintext. `user_name` is unique, backed by an index created at
/// startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_name: String,
    pub password: String,
    pub email_address: String,
}

impl User {
    /// Builds a new user document with a freshly generated id.
    ///
    /// The caller is responsible for passing an already-hashed password.
    pub fn new(user_name: String, password: String, email_address: String) -> Self {
        Self {
            id: ObjectId::new(),
            user_name,
            password,
            email_address,
        }
    }
}
