use super::*;

/// Tests listing an empty collection.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_empty_collection() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = PersonRepository::new(&test.db);

    assert!(repo.find_all().await?.is_empty());

    test.cleanup().await
}

/// Tests that every inserted person is returned.
///
/// Expected: both fixtures present, embedded roles included
#[tokio::test]
async fn returns_every_person() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let chronicler = factory::person::PersonFactory::new(&test.db)
        .role("chronicler")
        .build()
        .await?;
    factory::person::create_person(&test.db).await?;

    let repo = PersonRepository::new(&test.db);
    let persons = repo.find_all().await?;

    assert_eq!(persons.len(), 2);
    let stored = persons
        .iter()
        .find(|person| person.id == chronicler.id)
        .unwrap();
    assert_eq!(stored.roles.len(), 1);
    assert_eq!(stored.roles[0].text, "chronicler");

    test.cleanup().await
}
