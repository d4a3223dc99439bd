//! Replays the turn log against the initial deal.
//!
//! `reconstruct` is a left fold of [`apply_turn`] over the turns in creation
//! order. Each step consumes the previous state and returns the next one, so
//! a failing turn leaves nothing half-applied behind.

use tracing::{debug, enabled, Level};

use super::cards_types::Card;
use super::hints::{record_hint, HintType};
use super::narration::{self, Perspective, PlayOutcome};
use super::records::{Game, Player, PlayerId};
use super::rules::{first_draw_index, HAND_SIZE, STARTING_HINTS};
use super::state::{BoardPiles, CurrentState, PlayerState};
use super::turns::{Turn, TurnAction};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Rebuild the state of `game` from its players and turns.
///
/// Players are taken in ascending id order and turns in ascending id order
/// regardless of how they are passed in.
pub fn reconstruct(
    game: Option<&Game>,
    players: &[Player],
    turns: &[Turn],
) -> Result<CurrentState, DomainError> {
    let game = game.ok_or_else(|| DomainError::not_found(NotFoundKind::Game, "Game not found"))?;
    let initial = initial_state(game, players)?;

    let mut ordered: Vec<&Turn> = turns.iter().collect();
    ordered.sort_by_key(|t| t.id);

    let state = ordered
        .into_iter()
        .try_fold(initial, |state, turn| {
            apply_turn(state, turn, &game.initial_deck)
        })?
        .settle();

    if enabled!(Level::DEBUG) {
        debug!(game_id = game.id, "\n{}", state.render_table());
    }
    Ok(state)
}

/// State before any turn: dealt hands, empty hints, full hint budget.
pub fn initial_state(game: &Game, players: &[Player]) -> Result<CurrentState, DomainError> {
    if players.is_empty() {
        return Err(DomainError::not_found(
            NotFoundKind::Players,
            format!("Game {} has no players", game.id),
        ));
    }
    let mut seats: Vec<PlayerState> = players
        .iter()
        .map(|p| PlayerState {
            player_id: p.id,
            name: p.name.clone(),
            hand: p.initial_hand.clone(),
            hints: vec![Vec::new(); HAND_SIZE],
            narration: Vec::new(),
            turns_taken: 0,
        })
        .collect();
    seats.sort_by_key(|p| p.player_id);
    let first = seats[0].player_id;
    let draw_cursor = first_draw_index(seats.len());

    Ok(CurrentState {
        game_id: game.id,
        players: seats,
        board: BoardPiles::default(),
        mistakes: 0,
        hints_remaining: STARTING_HINTS,
        draw_cursor,
        turns_applied: 0,
        active_player_id: first,
        is_game_active: true,
    }
    .settle())
}

/// Apply one turn. Fails without producing a state when the turn is
/// malformed or breaks a rule.
pub fn apply_turn(
    mut state: CurrentState,
    turn: &Turn,
    deck: &[Card],
) -> Result<CurrentState, DomainError> {
    let action = turn.action()?;
    let actor = seat_of(&state, turn.player_id, turn)?;

    match action {
        TurnAction::Hint { target, hint } => {
            if state.hints_remaining == 0 {
                return Err(DomainError::OutOfHints);
            }
            let target = seat_of(&state, target, turn)?;
            give_hint(&mut state, actor, target, hint)?;
        }
        TurnAction::Discard { index } => {
            let (discarded, drawn) = replace_card(&mut state, actor, index, deck, turn)?;
            state.hints_remaining += 1;
            let actor_name = state.players[actor].name.clone();
            for (i, reader) in state.players.iter_mut().enumerate() {
                let perspective = if i == actor {
                    Perspective::Actor
                } else {
                    Perspective::Bystander
                };
                reader.narration.push(narration::discard_line(
                    perspective,
                    &actor_name,
                    &discarded,
                    &drawn,
                ));
            }
        }
        TurnAction::Play { index } => {
            let (played, drawn) = replace_card(&mut state, actor, index, deck, turn)?;
            let outcome = if state.board.accepts(&played) {
                state.board.place(&played);
                PlayOutcome::Matched
            } else {
                state.mistakes += 1;
                PlayOutcome::Mistake {
                    color: played.color,
                    needed: state.board.needed(played.color),
                    mistakes: state.mistakes,
                }
            };
            let actor_name = state.players[actor].name.clone();
            for (i, reader) in state.players.iter_mut().enumerate() {
                let perspective = if i == actor {
                    Perspective::Actor
                } else {
                    Perspective::Bystander
                };
                reader.narration.push(narration::play_line(
                    perspective,
                    &actor_name,
                    &played,
                    &drawn,
                    outcome,
                ));
            }
        }
    }

    state.players[actor].turns_taken += 1;
    state.turns_applied += 1;
    debug!(
        game_id = state.game_id,
        turn_id = turn.id,
        player_id = turn.player_id,
        ?action,
        hints_remaining = state.hints_remaining,
        mistakes = state.mistakes,
        draw_cursor = state.draw_cursor,
        "turn applied"
    );
    Ok(state.settle())
}

fn seat_of(state: &CurrentState, player_id: PlayerId, turn: &Turn) -> Result<usize, DomainError> {
    state.player_index(player_id).ok_or_else(|| {
        DomainError::invalid_turn(format!(
            "Turn {} references unknown player {player_id}",
            turn.id
        ))
    })
}

fn give_hint(
    state: &mut CurrentState,
    actor: usize,
    target: usize,
    hint: HintType,
) -> Result<(), DomainError> {
    if actor == target {
        return Err(DomainError::invalid_turn(format!(
            "Player {} cannot hint themselves",
            state.players[actor].player_id
        )));
    }
    state.hints_remaining -= 1;

    append_hint_records(&mut state.players[target], hint);

    let actor_name = state.players[actor].name.clone();
    let target_name = state.players[target].name.clone();
    for (i, reader) in state.players.iter_mut().enumerate() {
        let perspective = if i == actor {
            Perspective::Actor
        } else if i == target {
            Perspective::Target
        } else {
            Perspective::Bystander
        };
        reader.narration.push(narration::hint_line(
            perspective,
            &actor_name,
            &target_name,
            hint,
        ));
    }
    Ok(())
}

/// Every one of the `HAND_SIZE` slots gets a record, including slots with no
/// card in them.
pub(crate) fn append_hint_records(seat: &mut PlayerState, hint: HintType) {
    if seat.hints.len() < HAND_SIZE {
        seat.hints.resize_with(HAND_SIZE, Vec::new);
    }
    for slot in 0..HAND_SIZE {
        let record = record_hint(hint, seat.hand.get(slot));
        seat.hints[slot].push(record);
    }
}

/// Take the card at `index` out of the actor's hand and draw its replacement
/// into the leftmost slot with a fresh hint history.
fn replace_card(
    state: &mut CurrentState,
    actor: usize,
    index: usize,
    deck: &[Card],
    turn: &Turn,
) -> Result<(Card, Card), DomainError> {
    let hand_len = state.players[actor].hand.len();
    if index >= hand_len {
        return Err(DomainError::invalid_turn(format!(
            "Turn {} uses card {index} but the hand holds {hand_len}",
            turn.id
        )));
    }
    let drawn = *deck.get(state.draw_cursor).ok_or(DomainError::DeckExhausted {
        cursor: state.draw_cursor,
        deck_len: deck.len(),
    })?;
    state.draw_cursor += 1;

    let seat = &mut state.players[actor];
    let removed = seat.hand.remove(index);
    if index < seat.hints.len() {
        seat.hints.remove(index);
    }
    seat.hand.insert(0, drawn);
    seat.hints.insert(0, Vec::new());
    Ok((removed, drawn))
}
