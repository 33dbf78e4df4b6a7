use document::person::{Person, COLLECTION};
use futures::TryStreamExt;
use mongodb::{bson::doc, error::Error, Collection, Database};

pub struct PersonRepository {
    collection: Collection<Person>,
}

impl PersonRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// Returns every person document, unfiltered
    pub async fn find_all(&self) -> Result<Vec<Person>, Error> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut persons = Vec::new();
        while let Some(person) = cursor.try_next().await? {
            persons.push(person);
        }

        Ok(persons)
    }

    /// Inserts a new person document with its embedded roles and dependents
    pub async fn create(&self, person: &Person) -> Result<(), Error> {
        self.collection.insert_one(person).await?;

        Ok(())
    }
}
