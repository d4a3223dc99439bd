//! The 50-card deck: canonical order, shuffling and the initial deal.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::cards_types::{Card, Color, Number};
use super::rules::{DECK_SIZE, HAND_SIZE};
use crate::errors::domain::DomainError;

/// Every card once per copy, colour-major then number, in canonical order.
pub fn all_cards() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        for number in Number::ALL {
            for _ in 0..number.copies() {
                deck.push(Card::new(color, number));
            }
        }
    }
    deck
}

/// Shuffle the canonical deck. A seed makes the order reproducible.
pub fn shuffled_deck(seed: Option<u64>) -> Vec<Card> {
    let mut rng = match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_os_rng(),
    };
    let mut deck = all_cards();
    deck.shuffle(&mut rng);
    deck
}

/// Split the first `HAND_SIZE * player_count` cards into hands, in deck order.
pub fn deal_initial_hands(deck: &[Card], player_count: usize) -> Result<Vec<Vec<Card>>, DomainError> {
    let needed = HAND_SIZE * player_count;
    if needed > deck.len() {
        return Err(DomainError::DeckExhausted {
            cursor: deck.len(),
            deck_len: deck.len(),
        });
    }
    Ok(deck[..needed]
        .chunks(HAND_SIZE)
        .map(<[Card]>::to_vec)
        .collect())
}
