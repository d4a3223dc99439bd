//! SeaORM adapter for game repository - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QuerySelect, Set};

use crate::entities::games;
use crate::infra::db_errors::GAME_NOT_FOUND_PREFIX;

pub mod dto;

pub use dto::GameCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i32,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i32,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::Custom(format!("{GAME_NOT_FOUND_PREFIX}{game_id}")))
}

/// Takes a row lock on the game for the rest of the transaction.
/// SQLite serializes writers on its own and emits no lock clause.
pub async fn lock_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i32,
) -> Result<games::Model, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id)
        .lock_exclusive()
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::Custom(format!("{GAME_NOT_FOUND_PREFIX}{game_id}")))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let game_active = games::ActiveModel {
        id: NotSet,
        initial_deck: Set(serde_json::json!(dto.initial_deck)),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    game_active.insert(conn).await
}
