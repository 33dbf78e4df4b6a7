use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    domain::person::CreatePersonParams,
    dto::{
        api::ErrorDto,
        person::{CreatePersonDto, PersonDto},
    },
    error::AppError,
    service::person::PersonService,
    state::AppState,
};

/// Tag for grouping person endpoints in OpenAPI documentation
pub static PERSON_TAG: &str = "persons";

/// List all persons.
///
/// Returns every person document in the collection as a JSON array,
/// including each person's embedded roles and dependents.
///
/// # Arguments
/// - `state` - Application state containing the store handle
///
/// # Returns
/// - `200 OK` - Array of person documents
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    get,
    path = "/api/persons",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "Array of person documents", body = [PersonDto]),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn find_all_persons(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = PersonService::new(&state.db);

    let persons = service.find_all().await?;
    let persons: Vec<PersonDto> = persons.into_iter().map(PersonDto::from).collect();

    Ok((StatusCode::OK, Json(persons)))
}

/// Create a new person.
///
/// Builds a person document from the request body, including the embedded
/// roles and dependents arrays, and inserts it.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `payload` - Person creation data (names, roles, dependents, birth date)
///
/// # Returns
/// - `200 OK` - The inserted person document
/// - `400 Bad Request` - Missing or malformed request body
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    post,
    path = "/api/persons",
    tag = PERSON_TAG,
    request_body = CreatePersonDto,
    responses(
        (status = 200, description = "The inserted person document", body = PersonDto),
        (status = 400, description = "Missing or malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<CreatePersonDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PersonService::new(&state.db);

    let params = CreatePersonParams::from_dto(payload);
    let person = service.create(params).await?;

    Ok((StatusCode::OK, Json(PersonDto::from(person))))
}
