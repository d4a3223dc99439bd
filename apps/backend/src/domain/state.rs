//! Reconstructed game state. Derived from the turn log on every query and
//! never stored.

use std::fmt::Write as _;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::cards_display::print_hand;
use super::cards_types::{Card, Color, Number};
use super::hints::{describe_history, HintRecord};
use super::records::{GameId, PlayerId};
use super::rules;

/// Highest card played per colour; 0 is an empty pile, 5 a complete one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardPiles([u8; 5]);

impl BoardPiles {
    pub fn height(&self, color: Color) -> u8 {
        self.0[color as usize]
    }

    /// Number that would extend `color`'s pile, or `None` once it is complete.
    pub fn needed(&self, color: Color) -> Option<Number> {
        Number::from_value(self.height(color) + 1)
    }

    pub fn accepts(&self, card: &Card) -> bool {
        self.height(card.color) + 1 == card.number.value()
    }

    pub fn place(&mut self, card: &Card) {
        self.0[card.color as usize] = card.number.value();
    }

    /// Sum of pile heights, 0..=25.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|h| u32::from(*h)).sum()
    }
}

impl Serialize for BoardPiles {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Color::ALL.len()))?;
        for color in Color::ALL {
            map.serialize_entry(color.as_str(), &self.height(color))?;
        }
        map.end()
    }
}

/// One player's slice of the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    pub player_id: PlayerId,
    pub name: String,
    /// Newest card at index 0.
    pub hand: Vec<Card>,
    /// Hint history per slot, aligned with `hand`.
    pub hints: Vec<Vec<HintRecord>>,
    /// One line per turn, phrased for this player.
    pub narration: Vec<String>,
    pub turns_taken: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentState {
    pub game_id: GameId,
    /// Ascending player id, which is turn order.
    pub players: Vec<PlayerState>,
    pub board: BoardPiles,
    pub mistakes: u32,
    pub hints_remaining: u32,
    /// Index into the initial deck of the next card to draw.
    pub draw_cursor: usize,
    pub turns_applied: usize,
    pub active_player_id: PlayerId,
    pub is_game_active: bool,
}

impl CurrentState {
    pub fn player_index(&self, player_id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.player_id == player_id)
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    pub fn active_player(&self) -> Option<&PlayerState> {
        self.player(self.active_player_id)
    }

    pub fn score(&self) -> u32 {
        self.board.total()
    }

    /// Recompute the derived fields after the log has been folded.
    pub(crate) fn settle(mut self) -> Self {
        if let Some(next) = self
            .players
            .iter()
            .min_by_key(|p| (p.turns_taken, p.player_id))
        {
            self.active_player_id = next.player_id;
        }
        self.is_game_active = rules::is_game_active(self.mistakes);
        self
    }

    /// Multi-line table of every hand with its hints and the last line each
    /// player saw. The active player is marked with `>`.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "After turn {}: board {} | hints {} | mistakes {}",
            self.turns_applied,
            Color::ALL
                .iter()
                .map(|c| format!("{c} {}", self.board.height(*c)))
                .collect::<Vec<_>>()
                .join(", "),
            self.hints_remaining,
            self.mistakes
        );
        for p in &self.players {
            let marker = if p.player_id == self.active_player_id {
                "> "
            } else {
                "  "
            };
            let _ = writeln!(
                out,
                "{marker}(new) {} (old) ({})",
                print_hand(&p.hand),
                p.name
            );
            if let Some(last) = p.narration.last() {
                let _ = writeln!(out, "    Sees: {last}");
            }
            for (card, hints) in p.hand.iter().zip(&p.hints) {
                let _ = writeln!(out, "    {card}: {}", describe_history(hints));
            }
        }
        out
    }
}
