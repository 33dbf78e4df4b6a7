use document::customer::{Customer, Invoice};
use mongodb::Database;

use crate::{
    data::customer::CustomerRepository,
    domain::customer::{CreateCustomerParams, CreateInvoiceParams},
    error::AppError,
};

pub struct CustomerService<'a> {
    db: &'a Database,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Creates a new customer and returns the inserted document
    pub async fn create(&self, params: CreateCustomerParams) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);

        let customer = params.into_document();
        repo.create(&customer).await?;

        Ok(customer)
    }

    /// Appends an invoice to the customer located by user name and returns
    /// the appended invoice
    /// Returns None if no customer matches
    pub async fn add_invoice(
        &self,
        params: CreateInvoiceParams,
    ) -> Result<Option<Invoice>, AppError> {
        let repo = CustomerRepository::new(self.db);

        let user_name = params.user_name.clone();
        let invoice = params.into_invoice();

        let customer = repo.push_invoice(&user_name, &invoice).await?;

        Ok(customer.map(|_| invoice))
    }

    /// Returns a customer's invoices
    /// Returns None if no customer matches the user name
    pub async fn invoices(&self, user_name: &str) -> Result<Option<Vec<Invoice>>, AppError> {
        let repo = CustomerRepository::new(self.db);

        let customer = repo.find_by_user_name(user_name).await?;

        Ok(customer.map(|customer| customer.invoices))
    }
}
