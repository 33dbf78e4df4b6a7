//! Team factory for creating test team documents.

use document::team::{Player, Team, COLLECTION};
use mongodb::{error::Error, Database};

use crate::factory::helpers::next_id;

/// Factory for creating test teams with customizable fields.
pub struct TeamFactory<'a> {
    db: &'a Database,
    name: String,
    mascot: String,
    players: Vec<Player>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"` where id is auto-incremented
    /// - mascot: `"Hawk"`
    /// - players: empty
    pub fn new(db: &'a Database) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            mascot: "Hawk".to_string(),
            players: Vec::new(),
        }
    }

    /// Sets the team name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the mascot.
    pub fn mascot(mut self, mascot: impl Into<String>) -> Self {
        self.mascot = mascot.into();
        self
    }

    /// Adds a player to the initial roster.
    pub fn player(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: f64,
    ) -> Self {
        self.players.push(Player {
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
        });
        self
    }

    /// Builds and inserts the team document.
    pub async fn build(self) -> Result<Team, Error> {
        let team = Team::new(self.name, self.mascot, self.players);

        self.db
            .collection::<Team>(COLLECTION)
            .insert_one(&team)
            .await?;

        Ok(team)
    }
}

/// Creates a team with default values.
pub async fn create_team(db: &Database) -> Result<Team, Error> {
    TeamFactory::new(db).build().await
}
