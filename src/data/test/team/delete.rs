use super::*;

/// Tests removing a team by id.
///
/// Expected: removed document returned with roster, lookup finds nothing
#[tokio::test]
async fn removes_team_and_returns_document() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let team = factory::team::TeamFactory::new(&test.db)
        .player("Amy", "Lee", 50000.0)
        .build()
        .await?;

    let repo = TeamRepository::new(&test.db);
    let removed = repo.delete(team.id).await?.unwrap();

    assert_eq!(removed.id, team.id);
    assert_eq!(removed.players.len(), 1);
    assert_eq!(repo.find_by_id(team.id).await?, None);

    test.cleanup().await
}

/// Tests deleting an id that matches nothing.
///
/// Expected: None, other teams untouched
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    factory::team::create_team(&test.db).await?;

    let repo = TeamRepository::new(&test.db);
    let removed = repo.delete(ObjectId::new()).await?;

    assert_eq!(removed, None);
    assert_eq!(repo.find_all().await?.len(), 1);

    test.cleanup().await
}
