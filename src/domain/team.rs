use bson::oid::ObjectId;
use document::team::{Player, Team};

use crate::dto::team::{CreatePlayerDto, CreateTeamDto};

/// Parameters for creating a team with its initial roster.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTeamParams {
    pub name: String,
    pub mascot: String,
    pub players: Vec<Player>,
}

impl CreateTeamParams {
    /// Converts the request DTO into creation parameters.
    pub fn from_dto(dto: CreateTeamDto) -> Self {
        Self {
            name: dto.name,
            mascot: dto.mascot,
            players: dto
                .players
                .into_iter()
                .map(|player| Player {
                    first_name: player.first_name,
                    last_name: player.last_name,
                    salary: player.salary,
                })
                .collect(),
        }
    }

    /// Builds the document to insert.
    pub fn into_document(self) -> Team {
        Team::new(self.name, self.mascot, self.players)
    }
}

/// Parameters for appending a player to a team's roster.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePlayerParams {
    pub team_id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
}

impl CreatePlayerParams {
    /// Converts the path id and request DTO into append parameters.
    pub fn from_dto(team_id: ObjectId, dto: CreatePlayerDto) -> Self {
        Self {
            team_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            salary: dto.salary,
        }
    }

    /// Builds the embedded player to push onto the roster.
    pub fn into_player(self) -> Player {
        Player {
            first_name: self.first_name,
            last_name: self.last_name,
            salary: self.salary,
        }
    }
}
