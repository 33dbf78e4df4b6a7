use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Name of the collection composer documents are stored in.
pub const COLLECTION: &str = "composers";

/// A composer document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composer {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
}

impl Composer {
    /// Builds a new composer document with a freshly generated id.
    pub fn new(first_name: String, last_name: String) -> Self {
        Self {
            id: ObjectId::new(),
            first_name,
            last_name,
        }
    }
}
