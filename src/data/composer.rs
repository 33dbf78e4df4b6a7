use document::composer::{Composer, COLLECTION};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::Error,
    options::ReturnDocument,
    Collection, Database,
};

use crate::domain::composer::UpdateComposerParams;

pub struct ComposerRepository {
    collection: Collection<Composer>,
}

impl ComposerRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// Returns every composer document, unfiltered
    pub async fn find_all(&self) -> Result<Vec<Composer>, Error> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut composers = Vec::new();
        while let Some(composer) = cursor.try_next().await? {
            composers.push(composer);
        }

        Ok(composers)
    }

    /// Finds a single composer by id
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Composer>, Error> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    /// Inserts a new composer document
    pub async fn create(&self, composer: &Composer) -> Result<(), Error> {
        self.collection.insert_one(composer).await?;

        Ok(())
    }

    /// Overwrites the named fields in one atomic update, returning the
    /// post-image. Returns None if no composer matched the id.
    pub async fn update(&self, params: UpdateComposerParams) -> Result<Option<Composer>, Error> {
        self.collection
            .find_one_and_update(
                doc! { "_id": params.id },
                doc! { "$set": {
                    "firstName": params.first_name,
                    "lastName": params.last_name,
                } },
            )
            .return_document(ReturnDocument::After)
            .await
    }

    /// Removes a composer by id in one atomic operation, returning the
    /// removed document. Returns None if nothing matched.
    pub async fn delete(&self, id: ObjectId) -> Result<Option<Composer>, Error> {
        self.collection.find_one_and_delete(doc! { "_id": id }).await
    }
}
