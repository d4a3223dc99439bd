// Proptest generators for domain types.
// Turn logs are built against the evolving state so every generated log replays cleanly.

use proptest::prelude::*;

use super::cards_types::{Card, Color, Number};
use super::deck::shuffled_deck;
use super::hints::HintType;
use super::reconstruct::{apply_turn, initial_state};
use super::records::{Game, Player};
use super::rules::{HAND_SIZE, PLAYER_COUNT};
use super::state::CurrentState;
use super::test_state_helpers::{table, TurnLog};
use super::turns::TurnAction;

pub fn color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

pub fn number() -> impl Strategy<Value = Number> {
    prop::sample::select(Number::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (color(), number()).prop_map(|(color, number)| Card::new(color, number))
}

pub fn hint_type() -> impl Strategy<Value = HintType> {
    prop::sample::select(HintType::ALL.to_vec())
}

pub fn player_count() -> impl Strategy<Value = usize> {
    *PLAYER_COUNT.start()..=*PLAYER_COUNT.end()
}

/// Raw move choices; interpreted by [`build_log`].
pub fn move_choices(max_len: usize) -> impl Strategy<Value = Vec<(u8, u8, u8)>> {
    prop::collection::vec((0u8..3, any::<u8>(), any::<u8>()), 0..=max_len)
}

/// A shuffled table plus a legal log, and every intermediate state
/// (`states[0]` is the deal, `states[i]` follows turn `i`).
pub struct GeneratedGame {
    pub game: Game,
    pub players: Vec<Player>,
    pub log: TurnLog,
    pub states: Vec<CurrentState>,
}

/// Turn each choice into a legal action for the active player. Hints fall
/// back to discards when none are left; generation stops at the end of the deck.
pub fn build_log(seed: u64, player_count: usize, choices: &[(u8, u8, u8)]) -> GeneratedGame {
    let (game, players) = table(player_count, shuffled_deck(Some(seed)));
    let mut log = TurnLog::default();
    let mut state = initial_state(&game, &players).expect("players present");
    let mut states = vec![state.clone()];

    for &(kind, a, b) in choices {
        if state.draw_cursor >= game.initial_deck.len() {
            break;
        }
        let actor = state.active_player_id;
        let actor_idx = state.player_index(actor).expect("active player seated");
        let slot = usize::from(a) % HAND_SIZE;
        let action = match kind {
            0 if state.hints_remaining > 0 => {
                let offset = 1 + usize::from(b) % (player_count - 1);
                let target = state.players[(actor_idx + offset) % player_count].player_id;
                TurnAction::Hint {
                    target,
                    hint: HintType::ALL[usize::from(a) % HintType::ALL.len()],
                }
            }
            2 => TurnAction::Play { index: slot },
            _ => TurnAction::Discard { index: slot },
        };
        log.push(actor, action);
        let turn = log.turns.last().expect("just pushed");
        state = apply_turn(state, turn, &game.initial_deck).expect("generated turn is legal");
        states.push(state.clone());
    }

    GeneratedGame {
        game,
        players,
        log,
        states,
    }
}
