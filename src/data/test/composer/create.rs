use super::*;

/// Tests inserting a composer and reading it back by id.
///
/// Expected: Ok with first and last name round-tripped exactly
#[tokio::test]
async fn creates_composer_and_round_trips_names() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = ComposerRepository::new(&test.db);

    let composer = Composer::new("Johann".to_string(), "Bach".to_string());
    repo.create(&composer).await?;

    let found = repo.find_by_id(composer.id).await?;
    assert_eq!(found, Some(composer));

    test.cleanup().await
}

/// Tests that created composers get distinct generated ids.
///
/// Expected: two inserts with identical names, two different ids
#[tokio::test]
async fn generates_distinct_ids() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = ComposerRepository::new(&test.db);

    let first = Composer::new("Philip".to_string(), "Glass".to_string());
    let second = Composer::new("Philip".to_string(), "Glass".to_string());
    repo.create(&first).await?;
    repo.create(&second).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.find_all().await?.len(), 2);

    test.cleanup().await
}
