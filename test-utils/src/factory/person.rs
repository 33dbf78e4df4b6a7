//! Person factory for creating test person documents.

use document::person::{Dependent, Person, Role, COLLECTION};
use mongodb::{error::Error, Database};

use crate::factory::helpers::next_id;

/// Factory for creating test persons with customizable fields.
pub struct PersonFactory<'a> {
    db: &'a Database,
    first_name: String,
    last_name: String,
    roles: Vec<Role>,
    dependents: Vec<Dependent>,
    birth_date: String,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Person {id}"` where id is auto-incremented
    /// - last_name: `"Doe"`
    /// - roles, dependents: empty
    /// - birth_date: `"1970-01-01"`
    pub fn new(db: &'a Database) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Person {}", id),
            last_name: "Doe".to_string(),
            roles: Vec::new(),
            dependents: Vec::new(),
            birth_date: "1970-01-01".to_string(),
        }
    }

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Adds a role.
    pub fn role(mut self, text: impl Into<String>) -> Self {
        self.roles.push(Role { text: text.into() });
        self
    }

    /// Adds a dependent.
    pub fn dependent(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.dependents.push(Dependent {
            first_name: first_name.into(),
            last_name: last_name.into(),
        });
        self
    }

    /// Sets the birth date.
    pub fn birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = birth_date.into();
        self
    }

    /// Builds and inserts the person document.
    pub async fn build(self) -> Result<Person, Error> {
        let person = Person::new(
            self.first_name,
            self.last_name,
            self.roles,
            self.dependents,
            self.birth_date,
        );

        self.db
            .collection::<Person>(COLLECTION)
            .insert_one(&person)
            .await?;

        Ok(person)
    }
}

/// Creates a person with default values.
pub async fn create_person(db: &Database) -> Result<Person, Error> {
    PersonFactory::new(db).build().await
}
