//! SeaORM adapter for the append-only turns table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::turns;

pub mod dto;

pub use dto::TurnCreate;

pub async fn create_turn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TurnCreate,
) -> Result<turns::Model, sea_orm::DbErr> {
    let turn_active = turns::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        player_id: Set(dto.player_id),
        hint_target_id: Set(dto.hint_target_id),
        hint_type: Set(dto.hint_type),
        discard_index: Set(dto.discard_index),
        play_index: Set(dto.play_index),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    turn_active.insert(conn).await
}

/// The whole log for a game in creation order.
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i32,
) -> Result<Vec<turns::Model>, sea_orm::DbErr> {
    turns::Entity::find()
        .filter(turns::Column::GameId.eq(game_id))
        .order_by_asc(turns::Column::Id)
        .all(conn)
        .await
}

pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    turns::Entity::find()
        .filter(turns::Column::GameId.eq(game_id))
        .count(conn)
        .await
}
