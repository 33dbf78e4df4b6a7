use super::*;

/// Tests inserting a user.
///
/// Expected: retrievable by user name with the stored password intact
#[tokio::test]
async fn creates_user() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = UserRepository::new(&test.db);

    let user = User::new(
        "harmony".to_string(),
        "stored-hash".to_string(),
        "harmony@example.com".to_string(),
    );
    repo.create(&user).await?;

    let found = repo.find_by_user_name("harmony").await?;
    assert_eq!(found, Some(user));

    test.cleanup().await
}

/// Tests that the unique index rejects a second user with the same name.
///
/// Expected: second insert fails and is recognized as a duplicate-key
/// error, leaving exactly one document
#[tokio::test]
async fn unique_index_rejects_duplicate_user_name() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    startup::ensure_indexes(&test.db)
        .await
        .expect("index creation failed");

    let repo = UserRepository::new(&test.db);

    let first = factory::user::create_user_with_user_name(&test.db, "taken").await?;

    let duplicate = User::new(
        "taken".to_string(),
        "other-hash".to_string(),
        "other@example.com".to_string(),
    );
    let result = repo.create(&duplicate).await;

    let err = result.expect_err("duplicate insert should fail");
    assert!(is_duplicate_key(&err));

    // The original document wins the race untouched.
    let found = repo.find_by_user_name("taken").await?;
    assert_eq!(found, Some(first));

    test.cleanup().await
}
