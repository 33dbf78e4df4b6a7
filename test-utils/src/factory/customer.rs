//! Customer factory for creating test customer documents.

use document::customer::{Customer, COLLECTION};
use mongodb::{error::Error, Database};

use crate::factory::helpers::next_id;

/// Factory for creating test customers with customizable fields.
pub struct CustomerFactory<'a> {
    db: &'a Database,
    first_name: String,
    last_name: String,
    user_name: String,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Customer {id}"` where id is auto-incremented
    /// - last_name: `"Jones"`
    /// - user_name: `"customer{id}"`
    pub fn new(db: &'a Database) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Customer {}", id),
            last_name: "Jones".to_string(),
            user_name: format!("customer{}", id),
        }
    }

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the user name.
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Builds and inserts the customer document with an empty invoice list.
    pub async fn build(self) -> Result<Customer, Error> {
        let customer = Customer::new(self.first_name, self.last_name, self.user_name);

        self.db
            .collection::<Customer>(COLLECTION)
            .insert_one(&customer)
            .await?;

        Ok(customer)
    }
}

/// Creates a customer with default values.
pub async fn create_customer(db: &Database) -> Result<Customer, Error> {
    CustomerFactory::new(db).build().await
}

/// Creates a customer with a specific user name.
pub async fn create_customer_with_user_name(
    db: &Database,
    user_name: impl Into<String>,
) -> Result<Customer, Error> {
    CustomerFactory::new(db).user_name(user_name).build().await
}
