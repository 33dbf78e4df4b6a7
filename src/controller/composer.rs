use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    domain::composer::{CreateComposerParams, UpdateComposerParams},
    dto::{
        api::ErrorDto,
        composer::{ComposerDto, CreateComposerDto, UpdateComposerDto},
    },
    error::AppError,
    service::composer::ComposerService,
    state::AppState,
    util::parse::parse_object_id,
};

/// Tag for grouping composer endpoints in OpenAPI documentation
pub static COMPOSER_TAG: &str = "composers";

/// List all composers.
///
/// Returns every composer document in the collection as a JSON array, with
/// no filter and no pagination.
///
/// # Arguments
/// - `state` - Application state containing the store handle
///
/// # Returns
/// - `200 OK` - Array of composer documents
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    get,
    path = "/api/composers",
    tag = COMPOSER_TAG,
    responses(
        (status = 200, description = "Array of composer documents", body = [ComposerDto]),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn find_all_composers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComposerService::new(&state.db);

    let composers = service.find_all().await?;
    let composers: Vec<ComposerDto> = composers.into_iter().map(ComposerDto::from).collect();

    Ok((StatusCode::OK, Json(composers)))
}

/// Get a composer by id.
///
/// Returns the single composer document whose identifier matches the path
/// parameter. An unknown id is a 404, never an empty 200.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `id` - Composer id from the request path
///
/// # Returns
/// - `200 OK` - The composer document
/// - `400 Bad Request` - Malformed composer id
/// - `404 Not Found` - No composer with that id
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    get,
    path = "/api/composers/{id}",
    tag = COMPOSER_TAG,
    params(
        ("id" = String, Path, description = "Composer id")
    ),
    responses(
        (status = 200, description = "The composer document", body = ComposerDto),
        (status = 400, description = "Malformed composer id", body = ErrorDto),
        (status = 404, description = "Composer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn find_composer_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_object_id(&id, "composer")?;

    let service = ComposerService::new(&state.db);

    match service.find_by_id(id).await? {
        Some(composer) => Ok((StatusCode::OK, Json(ComposerDto::from(composer)))),
        None => Err(AppError::NotFound("Composer not found".to_string())),
    }
}

/// Create a new composer.
///
/// Builds a composer document from the request body and inserts it. The
/// generated identifier is returned with the document.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `payload` - Composer creation data (first and last name)
///
/// # Returns
/// - `200 OK` - The inserted composer document
/// - `400 Bad Request` - Missing or malformed request body
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    post,
    path = "/api/composers",
    tag = COMPOSER_TAG,
    request_body = CreateComposerDto,
    responses(
        (status = 200, description = "The inserted composer document", body = ComposerDto),
        (status = 400, description = "Missing or malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn create_composer(
    State(state): State<AppState>,
    Json(payload): Json<CreateComposerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComposerService::new(&state.db);

    let params = CreateComposerParams::from_dto(payload);
    let composer = service.create(params).await?;

    Ok((StatusCode::OK, Json(ComposerDto::from(composer))))
}

/// Update a composer by id.
///
/// Overwrites the composer's first and last name in a single atomic update
/// and returns the updated document.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `id` - Composer id from the request path
/// - `payload` - Replacement field values
///
/// # Returns
/// - `200 OK` - The updated composer document
/// - `400 Bad Request` - Malformed composer id or request body
/// - `404 Not Found` - No composer with that id
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    put,
    path = "/api/composers/{id}",
    tag = COMPOSER_TAG,
    params(
        ("id" = String, Path, description = "Composer id")
    ),
    request_body = UpdateComposerDto,
    responses(
        (status = 200, description = "The updated composer document", body = ComposerDto),
        (status = 400, description = "Malformed composer id or request body", body = ErrorDto),
        (status = 404, description = "Composer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn update_composer_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateComposerDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_object_id(&id, "composer")?;

    let service = ComposerService::new(&state.db);

    let params = UpdateComposerParams::from_dto(id, payload);

    match service.update(params).await? {
        Some(composer) => Ok((StatusCode::OK, Json(ComposerDto::from(composer)))),
        None => Err(AppError::NotFound("Composer not found".to_string())),
    }
}

/// Delete a composer by id.
///
/// Removes the composer in a single atomic find-and-remove and returns the
/// removed document.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `id` - Composer id from the request path
///
/// # Returns
/// - `200 OK` - The removed composer document
/// - `400 Bad Request` - Malformed composer id
/// - `404 Not Found` - No composer with that id
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    delete,
    path = "/api/composers/{id}",
    tag = COMPOSER_TAG,
    params(
        ("id" = String, Path, description = "Composer id")
    ),
    responses(
        (status = 200, description = "The removed composer document", body = ComposerDto),
        (status = 400, description = "Malformed composer id", body = ErrorDto),
        (status = 404, description = "Composer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn delete_composer_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_object_id(&id, "composer")?;

    let service = ComposerService::new(&state.db);

    match service.delete(id).await? {
        Some(composer) => Ok((StatusCode::OK, Json(ComposerDto::from(composer)))),
        None => Err(AppError::NotFound("Composer not found".to_string())),
    }
}
