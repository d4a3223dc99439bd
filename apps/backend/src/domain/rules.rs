use std::ops::RangeInclusive;

pub const DECK_SIZE: usize = 50;
pub const HAND_SIZE: usize = 4;
pub const STARTING_HINTS: u32 = 8;
pub const MAX_MISTAKES: u32 = 3;

/// Table sizes a game can be created with.
pub const PLAYER_COUNT: RangeInclusive<usize> = 2..=5;

/// Position in the initial deck of the first card drawn after the deal.
pub const fn first_draw_index(player_count: usize) -> usize {
    HAND_SIZE * player_count
}

pub const fn is_game_active(mistakes: u32) -> bool {
    mistakes < MAX_MISTAKES
}
