use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    domain::user::{LoginParams, SignupParams},
    dto::{
        api::ErrorDto,
        user::{LoginDto, SignupDto, UserDto},
    },
    error::AppError,
    service::session::SessionService,
    state::AppState,
};

/// Tag for grouping session endpoints in OpenAPI documentation
pub static SESSION_TAG: &str = "session";

/// Register a new user.
///
/// Rejects user names that are already taken, hashes the password with the
/// application's fixed work factor, and stores the new user. The response
/// never contains the password hash.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `payload` - Registration data (user name, password, email address)
///
/// # Returns
/// - `200 OK` - The registered user, hash stripped
/// - `400 Bad Request` - Empty user name or password
/// - `401 Unauthorized` - The user name is already in use
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    post,
    path = "/api/signup",
    tag = SESSION_TAG,
    request_body = SignupDto,
    responses(
        (status = 200, description = "The registered user", body = UserDto),
        (status = 400, description = "Empty user name or password", body = ErrorDto),
        (status = 401, description = "Username is already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SessionService::new(&state.db);

    let params = SignupParams::from_dto(payload)?;
    let user = service.signup(params).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Log a user in.
///
/// Verifies the supplied password against the stored hash. Unknown user
/// names and wrong passwords produce the identical response so user names
/// cannot be enumerated. The response never contains the password hash.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `payload` - Login data (user name and password)
///
/// # Returns
/// - `200 OK` - The authenticated user, hash stripped
/// - `401 Unauthorized` - Invalid username and/or password
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = SESSION_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "The authenticated user", body = UserDto),
        (status = 401, description = "Invalid username and/or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SessionService::new(&state.db);

    let params = LoginParams::from_dto(payload);
    let user = service.login(params).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}
