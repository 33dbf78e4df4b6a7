use super::*;

/// Tests inserting a customer.
///
/// Expected: stored with an empty invoice list and retrievable by user name
#[tokio::test]
async fn creates_customer_with_empty_invoices() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = CustomerRepository::new(&test.db);

    let customer = Customer::new(
        "Nora".to_string(),
        "Webb".to_string(),
        "nwebb".to_string(),
    );
    repo.create(&customer).await?;

    let found = repo.find_by_user_name("nwebb").await?.unwrap();
    assert_eq!(found.id, customer.id);
    assert_eq!(found.first_name, "Nora");
    assert!(found.invoices.is_empty());

    test.cleanup().await
}
