use super::*;

/// Tests inserting a team with an initial roster.
///
/// Expected: roster round-trips in order with salaries intact
#[tokio::test]
async fn creates_team_with_initial_roster() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = TeamRepository::new(&test.db);

    let team = Team::new(
        "Hawks".to_string(),
        "Hawk".to_string(),
        vec![Player {
            first_name: "Amy".to_string(),
            last_name: "Lee".to_string(),
            salary: 50000.0,
        }],
    );
    repo.create(&team).await?;

    let found = repo.find_by_id(team.id).await?.unwrap();
    assert_eq!(found.name, "Hawks");
    assert_eq!(found.mascot, "Hawk");
    assert_eq!(found.players.len(), 1);
    assert_eq!(found.players[0].first_name, "Amy");
    assert_eq!(found.players[0].salary, 50000.0);

    test.cleanup().await
}

/// Tests inserting a team with an empty roster.
///
/// Expected: players stored as an empty array
#[tokio::test]
async fn creates_team_with_empty_roster() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = TeamRepository::new(&test.db);

    let team = Team::new("Owls".to_string(), "Owl".to_string(), Vec::new());
    repo.create(&team).await?;

    let found = repo.find_by_id(team.id).await?.unwrap();
    assert!(found.players.is_empty());

    test.cleanup().await
}
