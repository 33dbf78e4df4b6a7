use super::*;

/// Tests removing a composer by id.
///
/// Expected: removed document returned, subsequent lookup finds nothing
#[tokio::test]
async fn removes_composer_and_returns_document() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let composer = factory::composer::create_composer(&test.db).await?;

    let repo = ComposerRepository::new(&test.db);
    let removed = repo.delete(composer.id).await?;

    assert_eq!(removed, Some(composer.clone()));
    assert_eq!(repo.find_by_id(composer.id).await?, None);

    test.cleanup().await
}

/// Tests deleting an id that matches nothing.
///
/// Expected: None, other documents untouched
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    factory::composer::create_composer(&test.db).await?;

    let repo = ComposerRepository::new(&test.db);
    let removed = repo.delete(ObjectId::new()).await?;

    assert_eq!(removed, None);
    assert_eq!(repo.find_all().await?.len(), 1);

    test.cleanup().await
}
