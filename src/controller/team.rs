use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    domain::team::{CreatePlayerParams, CreateTeamParams},
    dto::{
        api::ErrorDto,
        team::{CreatePlayerDto, CreateTeamDto, PlayerDto, TeamDto},
    },
    error::AppError,
    service::team::TeamService,
    state::AppState,
    util::parse::parse_object_id,
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "teams";

/// Create a new team.
///
/// Builds a team document from the request body, including the initial
/// player roster, and inserts it.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `payload` - Team creation data (name, mascot, players)
///
/// # Returns
/// - `200 OK` - The inserted team document
/// - `400 Bad Request` - Missing or malformed request body
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 200, description = "The inserted team document", body = TeamDto),
        (status = 400, description = "Missing or malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    let params = CreateTeamParams::from_dto(payload);
    let team = service.create(params).await?;

    Ok((StatusCode::OK, Json(TeamDto::from(team))))
}

/// List all teams.
///
/// Returns every team document in the collection as a JSON array, with no
/// filter and no pagination.
///
/// # Arguments
/// - `state` - Application state containing the store handle
///
/// # Returns
/// - `200 OK` - Array of team documents
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Array of team documents", body = [TeamDto]),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn find_all_teams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    let teams = service.find_all().await?;
    let teams: Vec<TeamDto> = teams.into_iter().map(TeamDto::from).collect();

    Ok((StatusCode::OK, Json(teams)))
}

/// Assign a player to a team.
///
/// Appends the player to the team's roster with a single atomic push and
/// returns the updated team, so concurrent assignments cannot lose players.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `id` - Team id from the request path
/// - `payload` - Player data (first name, last name, salary)
///
/// # Returns
/// - `200 OK` - The updated team document
/// - `400 Bad Request` - Malformed team id or request body
/// - `404 Not Found` - No team with that id
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    post,
    path = "/api/teams/{id}/players",
    tag = TEAM_TAG,
    params(
        ("id" = String, Path, description = "Team id")
    ),
    request_body = CreatePlayerDto,
    responses(
        (status = 200, description = "The updated team document", body = TeamDto),
        (status = 400, description = "Malformed team id or request body", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn assign_player_to_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_object_id(&id, "team")?;

    let service = TeamService::new(&state.db);

    let params = CreatePlayerParams::from_dto(id, payload);

    match service.add_player(params).await? {
        Some(team) => Ok((StatusCode::OK, Json(TeamDto::from(team)))),
        None => Err(AppError::NotFound("Team not found".to_string())),
    }
}

/// List all players on a team.
///
/// Returns the roster array of the team whose identifier matches the path
/// parameter.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `id` - Team id from the request path
///
/// # Returns
/// - `200 OK` - Array of the team's players
/// - `400 Bad Request` - Malformed team id
/// - `404 Not Found` - No team with that id
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    get,
    path = "/api/teams/{id}/players",
    tag = TEAM_TAG,
    params(
        ("id" = String, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Array of the team's players", body = [PlayerDto]),
        (status = 400, description = "Malformed team id", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn find_all_players_by_team_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_object_id(&id, "team")?;

    let service = TeamService::new(&state.db);

    match service.players(id).await? {
        Some(players) => {
            let players: Vec<PlayerDto> = players.into_iter().map(PlayerDto::from).collect();

            Ok((StatusCode::OK, Json(players)))
        }
        None => Err(AppError::NotFound("Team not found".to_string())),
    }
}

/// Delete a team by id.
///
/// Removes the team in a single atomic find-and-remove and returns the
/// removed document, roster included.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `id` - Team id from the request path
///
/// # Returns
/// - `200 OK` - The removed team document
/// - `400 Bad Request` - Malformed team id
/// - `404 Not Found` - No team with that id
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = String, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "The removed team document", body = TeamDto),
        (status = 400, description = "Malformed team id", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn delete_team_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_object_id(&id, "team")?;

    let service = TeamService::new(&state.db);

    match service.delete(id).await? {
        Some(team) => Ok((StatusCode::OK, Json(TeamDto::from(team)))),
        None => Err(AppError::NotFound("Team not found".to_string())),
    }
}
