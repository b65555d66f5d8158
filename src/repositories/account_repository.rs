use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::dto::NewAccount;
use crate::entities::user;
use crate::error::StoreError;
use crate::password;

/// Account operations over the user entity.
///
/// Session state is not managed here: after a successful delete the caller
/// must invalidate any session referencing the account.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new account. The password is hashed before it reaches the
    /// store; when none is given the placeholder default applies.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ConstraintViolation` when the username is already
    /// taken.
    pub async fn create(&self, input: NewAccount) -> Result<user::Model, StoreError> {
        let password = input
            .password
            .as_deref()
            .unwrap_or(password::DEFAULT_PASSWORD);
        let password_hash = password::hash_password(password)?;

        let row = user::ActiveModel {
            username: Set(input.username),
            password_hash: Set(password_hash),
            role: Set(input.role.as_str().to_string()),
            created_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        let created = row.insert(&self.db).await?;
        tracing::debug!(username = %created.username, role = %created.role, "Created account");
        Ok(created)
    }

    /// Delete the account matching the username exactly (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when no such username exists.
    pub async fn delete_by_username(&self, username: &str) -> Result<(), StoreError> {
        let result = user::Entity::delete_many()
            .filter(user::Column::Username.eq(username))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(format!(
                "No account with username '{username}'"
            )));
        }

        tracing::debug!(username, "Deleted account");
        Ok(())
    }

    /// Look up an account by username and verify the password against the
    /// stored hash.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown username and for a
    /// wrong password alike, so callers cannot distinguish the two.
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<user::Model, StoreError> {
        let Some(account) = self.find_by_username(username).await? else {
            return Err(StoreError::NotFound(format!(
                "No account with username '{username}'"
            )));
        };

        if !password::verify_password(password, &account.password_hash)? {
            return Err(StoreError::NotFound(format!(
                "No account with username '{username}'"
            )));
        }

        Ok(account)
    }

    /// Exact-match username lookup.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreUnavailable` if the store is unreachable.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user::Model>, StoreError> {
        let account = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(account)
    }
}
