use bson::oid::ObjectId;
use document::composer::Composer;

use crate::dto::composer::{CreateComposerDto, UpdateComposerDto};

/// Parameters for creating a composer.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateComposerParams {
    pub first_name: String,
    pub last_name: String,
}

impl CreateComposerParams {
    /// Converts the request DTO into creation parameters.
    pub fn from_dto(dto: CreateComposerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }

    /// Builds the document to insert.
    pub fn into_document(self) -> Composer {
        Composer::new(self.first_name, self.last_name)
    }
}

/// Parameters for replacing a composer's fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateComposerParams {
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
}

impl UpdateComposerParams {
    /// Converts the path id and request DTO into update parameters.
    pub fn from_dto(id: ObjectId, dto: UpdateComposerDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}
