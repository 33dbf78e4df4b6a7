use super::*;

/// Tests listing an empty collection.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_empty_collection() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = TeamRepository::new(&test.db);

    assert!(repo.find_all().await?.is_empty());

    test.cleanup().await
}

/// Tests that every inserted team is returned with its roster.
///
/// Expected: two fixtures present, rosters intact
#[tokio::test]
async fn returns_every_team() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let hawks = factory::team::TeamFactory::new(&test.db)
        .name("Hawks")
        .player("Amy", "Lee", 50000.0)
        .build()
        .await?;
    factory::team::create_team(&test.db).await?;

    let repo = TeamRepository::new(&test.db);
    let teams = repo.find_all().await?;

    assert_eq!(teams.len(), 2);
    let stored = teams.iter().find(|team| team.id == hawks.id).unwrap();
    assert_eq!(stored.players.len(), 1);
    assert_eq!(stored.players[0].last_name, "Lee");

    test.cleanup().await
}
