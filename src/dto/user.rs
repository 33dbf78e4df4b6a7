use document::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response shape for sign-up and login.
///
/// Deliberately has no password field: the stored hash never leaves the
/// server, so building this DTO is the output-shaping step that strips it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub user_name: String,
    pub email_address: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupDto {
    pub user_name: String,
    pub password: String,
    pub email_address: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub user_name: String,
    pub password: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            user_name: user.user_name,
            email_address: user.email_address,
        }
    }
}
