use super::*;

/// Tests overwriting a composer's names in place.
///
/// Expected: post-image returned and the change visible to a fresh read
#[tokio::test]
async fn overwrites_names_and_returns_post_image() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let composer = factory::composer::ComposerFactory::new(&test.db)
        .first_name("Antonio")
        .last_name("Salieri")
        .build()
        .await?;

    let repo = ComposerRepository::new(&test.db);
    let updated = repo
        .update(UpdateComposerParams {
            id: composer.id,
            first_name: "Wolfgang".to_string(),
            last_name: "Mozart".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, composer.id);
    assert_eq!(updated.first_name, "Wolfgang");
    assert_eq!(updated.last_name, "Mozart");

    let reread = repo.find_by_id(composer.id).await?.unwrap();
    assert_eq!(reread, updated);

    test.cleanup().await
}

/// Tests updating an id that matches nothing.
///
/// Expected: None, nothing inserted as a side effect
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = ComposerRepository::new(&test.db);
    let updated = repo
        .update(UpdateComposerParams {
            id: ObjectId::new(),
            first_name: "Nobody".to_string(),
            last_name: "Home".to_string(),
        })
        .await?;

    assert_eq!(updated, None);
    assert!(repo.find_all().await?.is_empty());

    test.cleanup().await
}
