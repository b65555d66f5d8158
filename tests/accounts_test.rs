mod common;

use beachduo_core::dto::NewAccount;
use beachduo_core::entities::Role;
use beachduo_core::error::StoreError;
use beachduo_core::password;
use beachduo_core::repositories::AccountRepository;

#[tokio::test]
async fn duplicate_seeded_username_fails_with_constraint_violation() -> anyhow::Result<()> {
    let db = common::test_db().await?;
    let accounts = AccountRepository::new(db);

    let result = accounts.create(NewAccount::new("user", "other-pw")).await;
    assert!(matches!(result, Err(StoreError::ConstraintViolation(_))));
    Ok(())
}

#[tokio::test]
async fn delete_account_removes_exactly_that_account() -> anyhow::Result<()> {
    let db = common::test_db().await?;
    let accounts = AccountRepository::new(db);

    accounts.delete_by_username("user").await?;

    let gone = accounts
        .find_by_credentials("user", password::DEFAULT_PASSWORD)
        .await;
    assert!(matches!(gone, Err(StoreError::NotFound(_))));

    // The other seeds are untouched
    assert!(accounts.find_by_username("Giacomelli").await?.is_some());
    assert!(accounts.find_by_username("super").await?.is_some());
    Ok(())
}

#[tokio::test]
async fn deleting_an_unknown_username_is_not_found() -> anyhow::Result<()> {
    let db = common::test_db().await?;
    let accounts = AccountRepository::new(db);

    let result = accounts.delete_by_username("nobody").await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn wrong_password_is_reported_as_not_found() -> anyhow::Result<()> {
    let db = common::test_db().await?;
    let accounts = AccountRepository::new(db);

    let result = accounts.find_by_credentials("user", "wrong-pw").await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn username_matching_is_case_sensitive() -> anyhow::Result<()> {
    let db = common::test_db().await?;
    let accounts = AccountRepository::new(db);

    // "User" does not collide with the seeded "user"
    let created = accounts.create(NewAccount::new("User", "secret-pw")).await?;
    assert_eq!(created.username, "User");

    let result = accounts
        .find_by_credentials("USER", password::DEFAULT_PASSWORD)
        .await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn account_without_password_gets_the_placeholder_default() -> anyhow::Result<()> {
    let db = common::test_db().await?;
    let accounts = AccountRepository::new(db);

    let input = NewAccount {
        username: "ana".to_string(),
        password: None,
        role: Role::default(),
    };
    let created = accounts.create(input).await?;
    assert_eq!(created.role, Role::User.as_str());
    assert_ne!(created.password_hash, password::DEFAULT_PASSWORD);

    let found = accounts
        .find_by_credentials("ana", password::DEFAULT_PASSWORD)
        .await?;
    assert_eq!(found.id, created.id);
    Ok(())
}
