use document::composer::Composer;
use mongodb::{bson::oid::ObjectId, Database};

use crate::{
    data::composer::ComposerRepository,
    domain::composer::{CreateComposerParams, UpdateComposerParams},
    error::AppError,
};

pub struct ComposerService<'a> {
    db: &'a Database,
}

impl<'a> ComposerService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Returns every composer in the collection
    pub async fn find_all(&self) -> Result<Vec<Composer>, AppError> {
        let repo = ComposerRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    /// Finds a composer by id
    /// Returns None if no composer matches
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Composer>, AppError> {
        let repo = ComposerRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Creates a new composer and returns the inserted document
    pub async fn create(&self, params: CreateComposerParams) -> Result<Composer, AppError> {
        let repo = ComposerRepository::new(self.db);

        let composer = params.into_document();
        repo.create(&composer).await?;

        Ok(composer)
    }

    /// Replaces a composer's fields
    /// Returns None if no composer matches the id
    pub async fn update(
        &self,
        params: UpdateComposerParams,
    ) -> Result<Option<Composer>, AppError> {
        let repo = ComposerRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Deletes a composer and returns the removed document
    /// Returns None if no composer matches the id
    pub async fn delete(&self, id: ObjectId) -> Result<Option<Composer>, AppError> {
        let repo = ComposerRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
