//! Display names handed out to players when a game is created.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

pub const NAME_POOL: [&str; 18] = [
    "John", "Jane", "Bob", "Alice", "Joe", "Mary", "Sally", "Tom", "Sue", "Bill", "Karen",
    "Mike", "Jill", "Jack", "Sarah", "David", "Megan", "Chris",
];

// Keeps the name stream independent of the deck stream for the same seed.
const NAME_STREAM: u64 = 0x6e61_6d65;

/// Pick `count` distinct names. A seed makes the choice reproducible.
///
/// Returns fewer than `count` names when the pool is smaller.
pub fn player_names(count: usize, seed: Option<u64>) -> Vec<String> {
    let mut rng = match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed ^ NAME_STREAM),
        None => ChaCha20Rng::from_os_rng(),
    };
    let mut pool = NAME_POOL.to_vec();
    pool.shuffle(&mut rng);
    pool.into_iter().take(count).map(str::to_string).collect()
}
