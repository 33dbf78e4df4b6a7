use super::*;

/// Tests listing an empty collection.
///
/// Expected: Ok with an empty vector, not an error
#[tokio::test]
async fn returns_empty_for_empty_collection() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = ComposerRepository::new(&test.db);

    assert!(repo.find_all().await?.is_empty());

    test.cleanup().await
}

/// Tests that every inserted composer is returned.
///
/// Expected: three fixtures in, three documents out
#[tokio::test]
async fn returns_every_composer() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let clara = factory::composer::ComposerFactory::new(&test.db)
        .first_name("Clara")
        .last_name("Schumann")
        .build()
        .await?;
    factory::composer::create_composer(&test.db).await?;
    factory::composer::create_composer(&test.db).await?;

    let repo = ComposerRepository::new(&test.db);
    let composers = repo.find_all().await?;

    assert_eq!(composers.len(), 3);
    assert!(composers.iter().any(|composer| composer.id == clara.id));

    test.cleanup().await
}
