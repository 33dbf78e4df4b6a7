use document::team::{Player, Team};
use mongodb::{bson::oid::ObjectId, Database};

use crate::{
    data::team::TeamRepository,
    domain::team::{CreatePlayerParams, CreateTeamParams},
    error::AppError,
};

pub struct TeamService<'a> {
    db: &'a Database,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Returns every team in the collection
    pub async fn find_all(&self) -> Result<Vec<Team>, AppError> {
        let repo = TeamRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    /// Creates a new team and returns the inserted document
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);

        let team = params.into_document();
        repo.create(&team).await?;

        Ok(team)
    }

    /// Appends a player to a team's roster and returns the updated team
    /// Returns None if no team matches the id
    pub async fn add_player(&self, params: CreatePlayerParams) -> Result<Option<Team>, AppError> {
        let repo = TeamRepository::new(self.db);

        let team_id = params.team_id;
        let player = params.into_player();

        Ok(repo.push_player(team_id, &player).await?)
    }

    /// Returns a team's roster
    /// Returns None if no team matches the id
    pub async fn players(&self, id: ObjectId) -> Result<Option<Vec<Player>>, AppError> {
        let repo = TeamRepository::new(self.db);

        let team = repo.find_by_id(id).await?;

        Ok(team.map(|team| team.players))
    }

    /// Deletes a team and returns the removed document
    /// Returns None if no team matches the id
    pub async fn delete(&self, id: ObjectId) -> Result<Option<Team>, AppError> {
        let repo = TeamRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
