use super::*;

/// Tests finding an existing composer by id.
///
/// Expected: Some with the stored document
#[tokio::test]
async fn finds_existing_composer() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let composer = factory::composer::create_composer(&test.db).await?;

    let repo = ComposerRepository::new(&test.db);
    let found = repo.find_by_id(composer.id).await?;

    assert_eq!(found, Some(composer));

    test.cleanup().await
}

/// Tests looking up an id that matches nothing.
///
/// Expected: None, so the handler can answer 404 instead of an empty 200
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    factory::composer::create_composer(&test.db).await?;

    let repo = ComposerRepository::new(&test.db);
    let found = repo.find_by_id(ObjectId::new()).await?;

    assert_eq!(found, None);

    test.cleanup().await
}
