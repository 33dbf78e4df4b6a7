use super::*;

/// Tests appending a player to an existing roster.
///
/// Expected: post-image roster grows by exactly one, new player last
#[tokio::test]
async fn appends_player_and_returns_updated_team() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let team = factory::team::TeamFactory::new(&test.db)
        .player("Amy", "Lee", 50000.0)
        .build()
        .await?;

    let repo = TeamRepository::new(&test.db);
    let updated = repo
        .push_player(
            team.id,
            &Player {
                first_name: "Ben".to_string(),
                last_name: "Ortiz".to_string(),
                salary: 61000.0,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.players.len(), team.players.len() + 1);
    assert_eq!(updated.players.last().unwrap().first_name, "Ben");

    let reread = repo.find_by_id(team.id).await?.unwrap();
    assert_eq!(reread.players.len(), 2);

    test.cleanup().await
}

/// Tests that consecutive appends both land.
///
/// Expected: roster length 2 after two pushes, insertion order preserved
#[tokio::test]
async fn consecutive_appends_are_not_lost() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let team = factory::team::create_team(&test.db).await?;

    let repo = TeamRepository::new(&test.db);
    repo.push_player(
        team.id,
        &Player {
            first_name: "First".to_string(),
            last_name: "In".to_string(),
            salary: 1.0,
        },
    )
    .await?;
    repo.push_player(
        team.id,
        &Player {
            first_name: "Second".to_string(),
            last_name: "In".to_string(),
            salary: 2.0,
        },
    )
    .await?;

    let reread = repo.find_by_id(team.id).await?.unwrap();
    assert_eq!(reread.players.len(), 2);
    assert_eq!(reread.players[0].first_name, "First");
    assert_eq!(reread.players[1].first_name, "Second");

    test.cleanup().await
}

/// Tests appending to a team id that matches nothing.
///
/// Expected: None, no document created by the push
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = TeamRepository::new(&test.db);
    let updated = repo
        .push_player(
            ObjectId::new(),
            &Player {
                first_name: "Ghost".to_string(),
                last_name: "Player".to_string(),
                salary: 0.0,
            },
        )
        .await?;

    assert_eq!(updated, None);
    assert!(repo.find_all().await?.is_empty());

    test.cleanup().await
}
