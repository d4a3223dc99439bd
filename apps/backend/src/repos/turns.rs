//! Turn log repository: append and read back in creation order.

use sea_orm::ConnectionTrait;

use crate::adapters::turns_sea as turns_adapter;
use crate::domain::{Color, GameId, HintType, Number, PlayerId, Turn, TurnAction};
use crate::entities::turns::{self, HintKind};
use crate::errors::domain::{DomainError, InfraErrorKind};

impl From<HintType> for HintKind {
    fn from(hint: HintType) -> Self {
        match hint {
            HintType::Color(Color::Red) => HintKind::ColorRed,
            HintType::Color(Color::Blue) => HintKind::ColorBlue,
            HintType::Color(Color::Green) => HintKind::ColorGreen,
            HintType::Color(Color::Yellow) => HintKind::ColorYellow,
            HintType::Color(Color::White) => HintKind::ColorWhite,
            HintType::Number(Number::One) => HintKind::NumberOne,
            HintType::Number(Number::Two) => HintKind::NumberTwo,
            HintType::Number(Number::Three) => HintKind::NumberThree,
            HintType::Number(Number::Four) => HintKind::NumberFour,
            HintType::Number(Number::Five) => HintKind::NumberFive,
        }
    }
}

impl From<HintKind> for HintType {
    fn from(kind: HintKind) -> Self {
        match kind {
            HintKind::ColorRed => HintType::Color(Color::Red),
            HintKind::ColorBlue => HintType::Color(Color::Blue),
            HintKind::ColorGreen => HintType::Color(Color::Green),
            HintKind::ColorYellow => HintType::Color(Color::Yellow),
            HintKind::ColorWhite => HintType::Color(Color::White),
            HintKind::NumberOne => HintType::Number(Number::One),
            HintKind::NumberTwo => HintType::Number(Number::Two),
            HintKind::NumberThree => HintType::Number(Number::Three),
            HintKind::NumberFour => HintType::Number(Number::Four),
            HintKind::NumberFive => HintType::Number(Number::Five),
        }
    }
}

fn stored_index(value: Option<i16>, turn_id: i32) -> Result<Option<usize>, DomainError> {
    value
        .map(|v| {
            usize::try_from(v).map_err(|_| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("Turn {turn_id} has negative card index {v}"),
                )
            })
        })
        .transpose()
}

impl TryFrom<turns::Model> for Turn {
    type Error = DomainError;

    fn try_from(model: turns::Model) -> Result<Self, Self::Error> {
        Ok(Turn {
            id: model.id,
            game_id: model.game_id,
            player_id: model.player_id,
            hint_target_id: model.hint_target_id,
            hint_type: model.hint_type.map(HintType::from),
            discard_index: stored_index(model.discard_index, model.id)?,
            play_index: stored_index(model.play_index, model.id)?,
        })
    }
}

fn to_column_index(index: usize) -> Result<i16, DomainError> {
    i16::try_from(index)
        .map_err(|_| DomainError::invalid_turn(format!("Card index {index} is out of range")))
}

/// Append one turn to the log.
pub async fn create_turn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: GameId,
    player_id: PlayerId,
    action: TurnAction,
) -> Result<Turn, DomainError> {
    let dto = match action {
        TurnAction::Hint { target, hint } => {
            turns_adapter::TurnCreate::hint(game_id, player_id, target, hint.into())
        }
        TurnAction::Discard { index } => {
            turns_adapter::TurnCreate::discard(game_id, player_id, to_column_index(index)?)
        }
        TurnAction::Play { index } => {
            turns_adapter::TurnCreate::play(game_id, player_id, to_column_index(index)?)
        }
    };
    let turn = turns_adapter::create_turn(conn, dto).await?;
    Turn::try_from(turn)
}

/// The log in creation order.
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: GameId,
) -> Result<Vec<Turn>, DomainError> {
    turns_adapter::find_all_by_game(conn, game_id)
        .await?
        .into_iter()
        .map(Turn::try_from)
        .collect()
}

pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: GameId,
) -> Result<u64, DomainError> {
    Ok(turns_adapter::count_by_game(conn, game_id).await?)
}
