use super::*;

/// Tests appending an invoice to a customer located by user name.
///
/// Expected: invoice list grows by exactly one and every money field and
/// line item round-trips exactly
#[tokio::test]
async fn appends_invoice_and_round_trips_values() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let customer = factory::customer::create_customer_with_user_name(&test.db, "nwebb").await?;

    let repo = CustomerRepository::new(&test.db);
    let invoice = sample_invoice();
    let updated = repo.push_invoice("nwebb", &invoice).await?.unwrap();

    assert_eq!(updated.id, customer.id);
    assert_eq!(updated.invoices.len(), 1);

    let stored = &updated.invoices[0];
    assert_eq!(stored.subtotal, 59.97);
    assert_eq!(stored.tax, 4.35);
    assert_eq!(stored.date_created, "2022-12-01");
    assert_eq!(stored.date_shipped, "2022-12-05");
    assert_eq!(stored.line_items, invoice.line_items);

    test.cleanup().await
}

/// Tests that consecutive appends both land.
///
/// Expected: invoice list length 2, insertion order preserved
#[tokio::test]
async fn consecutive_appends_are_not_lost() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    factory::customer::create_customer_with_user_name(&test.db, "repeat-buyer").await?;

    let repo = CustomerRepository::new(&test.db);
    repo.push_invoice("repeat-buyer", &sample_invoice()).await?;

    let mut second = sample_invoice();
    second.subtotal = 12.50;
    repo.push_invoice("repeat-buyer", &second).await?;

    let found = repo.find_by_user_name("repeat-buyer").await?.unwrap();
    assert_eq!(found.invoices.len(), 2);
    assert_eq!(found.invoices[0].subtotal, 59.97);
    assert_eq!(found.invoices[1].subtotal, 12.50);

    test.cleanup().await
}

/// Tests appending to a user name that matches nothing.
///
/// Expected: None, no customer created by the push
#[tokio::test]
async fn returns_none_for_unknown_user_name() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = CustomerRepository::new(&test.db);
    let updated = repo.push_invoice("nobody", &sample_invoice()).await?;

    assert!(updated.is_none());
    assert!(repo.find_by_user_name("nobody").await?.is_none());

    test.cleanup().await
}
