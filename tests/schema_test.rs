mod common;

use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait};

use beachduo_core::dto::NewAccount;
use beachduo_core::entities::{pair, tournament, user, Role};
use beachduo_core::repositories::{AccountRepository, TournamentRepository};
use beachduo_core::{password, schema};

#[tokio::test]
async fn initialize_twice_leaves_only_the_three_seeded_accounts() -> anyhow::Result<()> {
    let db = common::test_db().await?;

    // Populate every table beyond the seeds
    let tournaments = TournamentRepository::new(db.clone());
    tournaments.create(common::tournament("Praia Cup")).await?;

    let accounts = AccountRepository::new(db.clone());
    accounts.create(NewAccount::new("ana", "secret-pw")).await?;

    let dupla = pair::ActiveModel {
        player_one: Set("Ana".to_string()),
        player_two: Set("Bia".to_string()),
        tournament: Set("Praia Cup".to_string()),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    dupla.insert(&db).await?;

    // Second reset initialization wipes everything back to the seeds
    schema::initialize(&db, true).await?;

    let users = user::Entity::find().all(&db).await?;
    let mut usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    usernames.sort_unstable();
    assert_eq!(usernames, vec!["Giacomelli", "super", "user"]);

    assert!(tournament::Entity::find().all(&db).await?.is_empty());
    assert!(pair::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn initialize_without_reset_preserves_rows_and_seeds_once() -> anyhow::Result<()> {
    let db = common::test_db().await?;

    let tournaments = TournamentRepository::new(db.clone());
    tournaments.create(common::tournament("Praia Cup")).await?;

    schema::initialize(&db, false).await?;

    assert_eq!(tournaments.list_all().await?.len(), 1);
    assert_eq!(user::Entity::find().all(&db).await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn seeded_accounts_authenticate_with_the_default_password() -> anyhow::Result<()> {
    let db = common::test_db().await?;
    let accounts = AccountRepository::new(db);

    for (username, role) in [
        ("Giacomelli", Role::Admin),
        ("user", Role::User),
        ("super", Role::Super),
    ] {
        let found = accounts
            .find_by_credentials(username, password::DEFAULT_PASSWORD)
            .await?;
        assert_eq!(found.username, username);
        assert_eq!(Role::from_str(&found.role), Some(role));
        // Hashed at rest, never the plaintext placeholder
        assert_ne!(found.password_hash, password::DEFAULT_PASSWORD);
    }
    Ok(())
}
