pub mod game_id;
pub mod validated_json;

pub use game_id::{GameId, PlayerPath};
pub use validated_json::ValidatedJson;
