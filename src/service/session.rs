use document::user::User;
use mongodb::Database;

use crate::{
    data::user::{is_duplicate_key, UserRepository},
    domain::user::{LoginParams, SignupParams},
    error::AppError,
    util::credential,
};

/// Message for a sign-up against a taken user name.
const USERNAME_IN_USE: &str = "Username is already in use";

/// Message for every failed login, regardless of cause. Absent user and
/// wrong password are deliberately indistinguishable so user names cannot
/// be enumerated.
const INVALID_CREDENTIALS: &str = "Invalid username and/or password";

pub struct SessionService<'a> {
    db: &'a Database,
}

impl<'a> SessionService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// Checks for an existing user with the same name, hashes the password,
    /// and inserts. The existence check and the insert are not atomic; the
    /// unique index on userName backstops the race, and the losing insert
    /// is reported exactly like a failed existence check.
    ///
    /// # Arguments
    /// - `params` - Validated sign-up parameters (plaintext password)
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user, password field already hashed
    /// - `Err(AppError::Unauthorized)` - The user name is taken
    pub async fn signup(&self, params: SignupParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_user_name(&params.user_name).await?.is_some() {
            return Err(AppError::Unauthorized(USERNAME_IN_USE.to_string()));
        }

        let hashed_password = credential::hash_password(&params.password)?;
        let user = User::new(params.user_name, hashed_password, params.email_address);

        match repo.create(&user).await {
            Ok(()) => Ok(user),
            Err(err) if is_duplicate_key(&err) => {
                Err(AppError::Unauthorized(USERNAME_IN_USE.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Authenticates a user by name and password.
    ///
    /// # Arguments
    /// - `params` - Login parameters (plaintext password)
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user on a successful match
    /// - `Err(AppError::Unauthorized)` - Unknown user or wrong password,
    ///   with the identical message for both
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_user_name(&params.user_name).await? else {
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !credential::verify_password(&params.password, &user.password) {
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }
}
