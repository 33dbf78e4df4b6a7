use document::customer::{Customer, Invoice, COLLECTION};
use mongodb::{
    bson::{self, doc},
    error::Error,
    options::ReturnDocument,
    Collection, Database,
};

pub struct CustomerRepository {
    collection: Collection<Customer>,
}

impl CustomerRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// Finds a single customer by user name. Uniqueness is not enforced for
    /// customers; this takes the first match.
    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<Customer>, Error> {
        self.collection
            .find_one(doc! { "userName": user_name })
            .await
    }

    /// Inserts a new customer document
    pub async fn create(&self, customer: &Customer) -> Result<(), Error> {
        self.collection.insert_one(customer).await?;

        Ok(())
    }

    /// Appends an invoice to the customer located by user name with a single
    /// atomic push, returning the updated customer. Returns None if no
    /// customer matched. Concurrent appends both land; neither is lost.
    pub async fn push_invoice(
        &self,
        user_name: &str,
        invoice: &Invoice,
    ) -> Result<Option<Customer>, Error> {
        let invoice = bson::to_bson(invoice)?;

        self.collection
            .find_one_and_update(
                doc! { "userName": user_name },
                doc! { "$push": { "invoices": invoice } },
            )
            .return_document(ReturnDocument::After)
            .await
    }
}
