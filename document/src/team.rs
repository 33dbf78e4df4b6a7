use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Name of the collection team documents are stored in.
pub const COLLECTION: &str = "teams";

/// A player on a team's roster. Owned by the parent team and addressed only
/// by position; players are appended via an atomic array push and never
/// removed individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
}

/// A team document with its embedded player roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub mascot: String,
    pub players: Vec<Player>,
}

impl Team {
    /// Builds a new team document with a freshly generated id.
    pub fn new(name: String, mascot: String, players: Vec<Player>) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            mascot,
            players,
        }
    }
}
