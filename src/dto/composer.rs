use document::composer::Composer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComposerDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComposerDto {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComposerDto {
    pub first_name: String,
    pub last_name: String,
}

impl From<Composer> for ComposerDto {
    fn from(composer: Composer) -> Self {
        Self {
            id: composer.id.to_hex(),
            first_name: composer.first_name,
            last_name: composer.last_name,
        }
    }
}
