use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stored hint vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum HintKind {
    #[sea_orm(string_value = "COLOR_RED")]
    ColorRed,
    #[sea_orm(string_value = "COLOR_BLUE")]
    ColorBlue,
    #[sea_orm(string_value = "COLOR_GREEN")]
    ColorGreen,
    #[sea_orm(string_value = "COLOR_YELLOW")]
    ColorYellow,
    #[sea_orm(string_value = "COLOR_WHITE")]
    ColorWhite,
    #[sea_orm(string_value = "NUMBER_ONE")]
    NumberOne,
    #[sea_orm(string_value = "NUMBER_TWO")]
    NumberTwo,
    #[sea_orm(string_value = "NUMBER_THREE")]
    NumberThree,
    #[sea_orm(string_value = "NUMBER_FOUR")]
    NumberFour,
    #[sea_orm(string_value = "NUMBER_FIVE")]
    NumberFive,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "turns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "game_id")]
    pub game_id: i32,
    #[sea_orm(column_name = "player_id")]
    pub player_id: i32,
    #[sea_orm(column_name = "hint_target_id")]
    pub hint_target_id: Option<i32>,
    #[sea_orm(column_name = "hint_type")]
    pub hint_type: Option<HintKind>,
    #[sea_orm(column_name = "discard_index")]
    pub discard_index: Option<i16>,
    #[sea_orm(column_name = "play_index")]
    pub play_index: Option<i16>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id"
    )]
    Game,
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id"
    )]
    Player,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
