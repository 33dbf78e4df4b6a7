use document::team::{Player, Team, COLLECTION};
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId},
    error::Error,
    options::ReturnDocument,
    Collection, Database,
};

pub struct TeamRepository {
    collection: Collection<Team>,
}

impl TeamRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// Returns every team document, unfiltered
    pub async fn find_all(&self) -> Result<Vec<Team>, Error> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut teams = Vec::new();
        while let Some(team) = cursor.try_next().await? {
            teams.push(team);
        }

        Ok(teams)
    }

    /// Finds a single team by id
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Team>, Error> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    /// Inserts a new team document with its embedded roster
    pub async fn create(&self, team: &Team) -> Result<(), Error> {
        self.collection.insert_one(team).await?;

        Ok(())
    }

    /// Appends a player to the roster with a single atomic push, returning
    /// the updated team. Returns None if no team matched the id.
    pub async fn push_player(&self, id: ObjectId, player: &Player) -> Result<Option<Team>, Error> {
        let player = bson::to_bson(player)?;

        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$push": { "players": player } })
            .return_document(ReturnDocument::After)
            .await
    }

    /// Removes a team by id in one atomic operation, returning the removed
    /// document. Returns None if nothing matched.
    pub async fn delete(&self, id: ObjectId) -> Result<Option<Team>, Error> {
        self.collection.find_one_and_delete(doc! { "_id": id }).await
    }
}
