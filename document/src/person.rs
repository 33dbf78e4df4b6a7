use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Name of the collection person documents are stored in.
pub const COLLECTION: &str = "people";

/// A role held by a person. Owned by the parent person, no identity of
/// its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub text: String,
}

/// A dependent of a person. Owned by the parent person, no identity of
/// its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependent {
    pub first_name: String,
    pub last_name: String,
}

/// A person document with its embedded roles and dependents.
///
/// The birth date is stored as an opaque string; the API never interprets
/// or normalizes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<Role>,
    pub dependents: Vec<Dependent>,
    pub birth_date: String,
}

impl Person {
    /// Builds a new person document with a freshly generated id.
    pub fn new(
        first_name: String,
        last_name: String,
        roles: Vec<Role>,
        dependents: Vec<Dependent>,
        birth_date: String,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            first_name,
            last_name,
            roles,
            dependents,
            birth_date,
        }
    }
}
