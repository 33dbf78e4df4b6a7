use crate::{
    dto::user::{LoginDto, SignupDto},
    error::AppError,
};

/// Validated parameters for registering a user.
///
/// `password` is still plaintext here; hashing happens in the session
/// service so the params type never needs to know the work factor.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupParams {
    pub user_name: String,
    pub password: String,
    pub email_address: String,
}

impl SignupParams {
    /// Validates and converts the request DTO into sign-up parameters.
    ///
    /// # Arguments
    /// - `dto` - The sign-up request body
    ///
    /// # Returns
    /// - `Ok(SignupParams)` - Fully populated parameters
    /// - `Err(AppError::Validation)` - userName or password is empty
    pub fn from_dto(dto: SignupDto) -> Result<Self, AppError> {
        if dto.user_name.trim().is_empty() {
            return Err(AppError::Validation("userName must not be empty".to_string()));
        }
        if dto.password.is_empty() {
            return Err(AppError::Validation("password must not be empty".to_string()));
        }

        Ok(Self {
            user_name: dto.user_name,
            password: dto.password,
            email_address: dto.email_address,
        })
    }
}

/// Parameters for a login attempt.
///
/// Not validated beyond shape: an empty name or password simply fails
/// verification, which keeps every credential failure on the same path.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginParams {
    pub user_name: String,
    pub password: String,
}

impl LoginParams {
    /// Converts the request DTO into login parameters.
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            user_name: dto.user_name,
            password: dto.password,
        }
    }
}
