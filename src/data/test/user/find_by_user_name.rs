use super::*;

/// Tests locating a user by user name.
///
/// Expected: Some with the matching document
#[tokio::test]
async fn finds_user_by_user_name() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    factory::user::create_user(&test.db).await?;
    let user = factory::user::create_user_with_user_name(&test.db, "harmony").await?;

    let repo = UserRepository::new(&test.db);
    let found = repo.find_by_user_name("harmony").await?;

    assert_eq!(found, Some(user));

    test.cleanup().await
}

/// Tests looking up a user name that matches nothing.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_user_name() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    factory::user::create_user(&test.db).await?;

    let repo = UserRepository::new(&test.db);
    let found = repo.find_by_user_name("no-such-user").await?;

    assert!(found.is_none());

    test.cleanup().await
}
