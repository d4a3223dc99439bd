//! Domain layer: cards, hints and the turn-log reconstructor. Pure code, no I/O.

pub mod cards_display;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod decision;
pub mod deck;
pub mod hints;
pub mod narration;
pub mod player_view;
pub mod prompt;
pub mod reconstruct;
pub mod records;
pub mod rules;
pub mod state;
pub mod turns;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;

// Re-exports for ergonomics
pub use cards_parsing::{parse_card, try_parse_cards};
pub use cards_types::{Card, Color, Number};
pub use decision::parse_decision;
pub use deck::{all_cards, deal_initial_hands, shuffled_deck};
pub use hints::{hint_matches, record_hint, HintRecord, HintType};
pub use player_view::{PlayerView, SeatView};
pub use prompt::build_prompt;
pub use reconstruct::{apply_turn, reconstruct};
pub use records::{Game, GameId, Player, PlayerId};
pub use state::{BoardPiles, CurrentState, PlayerState};
pub use turns::{Turn, TurnAction};
