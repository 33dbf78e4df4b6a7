use document::person::{Dependent, Person, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub text: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DependentDto {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<RoleDto>,
    pub dependents: Vec<DependentDto>,
    pub birth_date: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonDto {
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<RoleDto>,
    pub dependents: Vec<DependentDto>,
    pub birth_date: String,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        Self { text: role.text }
    }
}

impl From<Dependent> for DependentDto {
    fn from(dependent: Dependent) -> Self {
        Self {
            first_name: dependent.first_name,
            last_name: dependent.last_name,
        }
    }
}

impl From<Person> for PersonDto {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.to_hex(),
            first_name: person.first_name,
            last_name: person.last_name,
            roles: person.roles.into_iter().map(RoleDto::from).collect(),
            dependents: person
                .dependents
                .into_iter()
                .map(DependentDto::from)
                .collect(),
            birth_date: person.birth_date,
        }
    }
}
