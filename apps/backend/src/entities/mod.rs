pub mod games;
pub mod players;
pub mod turns;

pub use games::Entity as Games;
pub use games::Model as Game;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use turns::Entity as Turns;
pub use turns::Model as Turn;
