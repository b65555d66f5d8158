use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use beachduo_core::dto::NewTournament;
use beachduo_core::schema;

/// Fresh in-memory store with the schema applied and accounts seeded.
pub async fn test_db() -> anyhow::Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    schema::initialize(&db, true).await?;
    Ok(db)
}

/// A valid tournament input with the given name.
#[allow(dead_code)]
pub fn tournament(name: &str) -> NewTournament {
    NewTournament {
        name: name.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default(),
        place: "Copacabana".to_string(),
        photo: "https://x/y.png".to_string(),
        description: None,
    }
}
