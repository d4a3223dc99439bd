//! DTOs for games_sea adapter.

/// DTO for creating a new game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    /// Card tokens in draw order.
    pub initial_deck: Vec<String>,
}

impl GameCreate {
    pub fn new(initial_deck: Vec<String>) -> Self {
        Self { initial_deck }
    }
}
