use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::dto::NewTournament;
use crate::entities::tournament;
use crate::error::StoreError;

/// CRUD operations over the tournament entity.
///
/// Holds its own connection handle; the shell constructs one repository and
/// awaits its operations one at a time.
#[derive(Debug, Clone)]
pub struct TournamentRepository {
    db: DatabaseConnection,
}

impl TournamentRepository {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new tournament and return the stored row.
    ///
    /// Inputs are validated by the caller (see [`NewTournament::validate`]);
    /// only store-level constraints are enforced here. Duplicates are
    /// allowed: two tournaments with identical fields are distinct rows.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreUnavailable` if the schema was never
    /// initialized or the store is unreachable.
    pub async fn create(&self, input: NewTournament) -> Result<tournament::Model, StoreError> {
        let row = tournament::ActiveModel {
            name: Set(input.name),
            date: Set(input.date),
            place: Set(input.place),
            photo: Set(input.photo),
            description: Set(input.description),
            created_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        let created = row.insert(&self.db).await?;
        tracing::debug!(id = created.id, name = %created.name, "Created tournament");
        Ok(created)
    }

    /// All tournaments, ordered by id ascending (insertion order), fully
    /// materialized.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreUnavailable` if the store is unreachable.
    pub async fn list_all(&self) -> Result<Vec<tournament::Model>, StoreError> {
        let rows = tournament::Entity::find()
            .order_by_asc(tournament::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Delete the tournament with the given id.
    ///
    /// A missing id is a no-op, not an error. Never cascades to duplas:
    /// pairs reference tournaments by name and stay behind.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreUnavailable` if the store is unreachable.
    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = tournament::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            tracing::debug!(id, "Delete skipped: no tournament with that id");
        }
        Ok(())
    }
}
