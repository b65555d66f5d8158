use migration::{Migrator, MigratorTrait};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::entities::{user, Role};
use crate::error::StoreError;
use crate::password;

/// The three accounts present after every initialization.
const SEED_ACCOUNTS: &[(&str, Role)] = &[
    ("Giacomelli", Role::Admin),
    ("user", Role::User),
    ("super", Role::Super),
];

/// Prepare the store schema and seed the fixed accounts.
///
/// With `reset == true` every table is dropped and recreated first, wiping
/// all accounts and tournaments; with `reset == false` only pending
/// migrations run and existing rows are kept. Either way the call is
/// idempotent: running it twice in a row leaves the same three seeded
/// accounts.
///
/// Errors are returned, never swallowed. Callers must not issue repository
/// operations after a failed initialize.
///
/// # Errors
///
/// Returns `StoreError::StoreUnavailable` when the store cannot be reached,
/// or another `StoreError` if a migration or seed insert fails.
pub async fn initialize(db: &DatabaseConnection, reset: bool) -> Result<(), StoreError> {
    if reset {
        tracing::warn!("Resetting store: all existing rows will be dropped");
        Migrator::fresh(db).await?;
    } else {
        Migrator::up(db, None).await?;
    }

    seed_accounts(db).await?;
    Ok(())
}

/// Insert the seed accounts that are missing.
///
/// Insert-if-absent keeps the non-reset path from duplicating seeds or
/// overwriting a changed password.
async fn seed_accounts(db: &DatabaseConnection) -> Result<(), StoreError> {
    for (username, role) in SEED_ACCOUNTS {
        let existing = user::Entity::find()
            .filter(user::Column::Username.eq(*username))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        let password_hash = password::hash_password(password::DEFAULT_PASSWORD)?;
        let account = user::ActiveModel {
            username: Set((*username).to_string()),
            password_hash: Set(password_hash),
            role: Set(role.as_str().to_string()),
            created_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };
        account.insert(db).await?;
        tracing::debug!(username = %username, role = role.as_str(), "Seeded account");
    }

    Ok(())
}
