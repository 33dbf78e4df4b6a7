use document::person::{Dependent, Person, Role};

use crate::dto::person::CreatePersonDto;

/// Parameters for creating a person with its embedded roles and dependents.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePersonParams {
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<Role>,
    pub dependents: Vec<Dependent>,
    pub birth_date: String,
}

impl CreatePersonParams {
    /// Converts the request DTO into creation parameters.
    pub fn from_dto(dto: CreatePersonDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            roles: dto
                .roles
                .into_iter()
                .map(|role| Role { text: role.text })
                .collect(),
            dependents: dto
                .dependents
                .into_iter()
                .map(|dependent| Dependent {
                    first_name: dependent.first_name,
                    last_name: dependent.last_name,
                })
                .collect(),
            birth_date: dto.birth_date,
        }
    }

    /// Builds the document to insert.
    pub fn into_document(self) -> Person {
        Person::new(
            self.first_name,
            self.last_name,
            self.roles,
            self.dependents,
            self.birth_date,
        )
    }
}
