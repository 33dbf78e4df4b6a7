use super::*;

/// Tests inserting a person with embedded roles and dependents.
///
/// Expected: embedded arrays round-trip in order with their values intact
#[tokio::test]
async fn creates_person_with_embedded_arrays() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = PersonRepository::new(&test.db);

    let person = Person::new(
        "Ada".to_string(),
        "Lovelace".to_string(),
        vec![
            Role {
                text: "mathematician".to_string(),
            },
            Role {
                text: "writer".to_string(),
            },
        ],
        vec![Dependent {
            first_name: "Byron".to_string(),
            last_name: "King".to_string(),
        }],
        "1815-12-10".to_string(),
    );
    repo.create(&person).await?;

    let persons = repo.find_all().await?;
    assert_eq!(persons.len(), 1);

    let stored = &persons[0];
    assert_eq!(stored.roles.len(), 2);
    assert_eq!(stored.roles[0].text, "mathematician");
    assert_eq!(stored.roles[1].text, "writer");
    assert_eq!(stored.dependents.len(), 1);
    assert_eq!(stored.dependents[0].first_name, "Byron");
    assert_eq!(stored.birth_date, "1815-12-10");

    test.cleanup().await
}

/// Tests inserting a person with empty embedded arrays.
///
/// Expected: empty roles and dependents stored as empty arrays, not absent
#[tokio::test]
async fn creates_person_with_empty_arrays() -> Result<(), Error> {
    let Some(test) = TestContext::new().await else {
        return Ok(());
    };

    let repo = PersonRepository::new(&test.db);

    let person = Person::new(
        "Solo".to_string(),
        "Artist".to_string(),
        Vec::new(),
        Vec::new(),
        "1990-06-15".to_string(),
    );
    repo.create(&person).await?;

    let persons = repo.find_all().await?;
    assert_eq!(persons.len(), 1);
    assert!(persons[0].roles.is_empty());
    assert!(persons[0].dependents.is_empty());

    test.cleanup().await
}
