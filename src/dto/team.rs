use document::team::{Player, Team};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: String,
    pub name: String,
    pub mascot: String,
    pub players: Vec<PlayerDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamDto {
    pub name: String,
    pub mascot: String,
    pub players: Vec<PlayerDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerDto {
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
}

impl From<Player> for PlayerDto {
    fn from(player: Player) -> Self {
        Self {
            first_name: player.first_name,
            last_name: player.last_name,
            salary: player.salary,
        }
    }
}

impl From<Team> for TeamDto {
    fn from(team: Team) -> Self {
        Self {
            id: team.id.to_hex(),
            name: team.name,
            mascot: team.mascot,
            players: team.players.into_iter().map(PlayerDto::from).collect(),
        }
    }
}
