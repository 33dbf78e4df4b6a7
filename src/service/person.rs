use document::person::Person;
use mongodb::Database;

use crate::{data::person::PersonRepository, domain::person::CreatePersonParams, error::AppError};

pub struct PersonService<'a> {
    db: &'a Database,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Returns every person in the collection
    pub async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        let repo = PersonRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    /// Creates a new person and returns the inserted document
    pub async fn create(&self, params: CreatePersonParams) -> Result<Person, AppError> {
        let repo = PersonRepository::new(self.db);

        let person = params.into_document();
        repo.create(&person).await?;

        Ok(person)
    }
}
