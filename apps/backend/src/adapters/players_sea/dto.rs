//! DTOs for players_sea adapter.

#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub game_id: i32,
    pub name: String,
    /// Card tokens, leftmost first.
    pub initial_hand: Vec<String>,
}

impl PlayerCreate {
    pub fn new(game_id: i32, name: impl Into<String>, initial_hand: Vec<String>) -> Self {
        Self {
            game_id,
            name: name.into(),
            initial_hand,
        }
    }
}
