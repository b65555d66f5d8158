use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A dupla: two players entered together into a tournament.
///
/// `tournament` holds the tournament's name, not its id. There is no foreign
/// key, so deleting a tournament leaves its pairs in place.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "duplas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_one: String,
    pub player_two: String,
    pub tournament: String,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
