use crate::error::{Error, Result};
use crate::Card;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DECK_SIZE: usize = 52;

/// Ordered stack of undealt cards. `draw` takes from the front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
}

impl Deck {
    /// Full deck in generation order (unshuffled)
    pub fn new() -> Self {
        Self {
            cards: (0..DECK_SIZE).map(Card::from_index).collect(),
            next: 0,
        }
    }

    pub fn new_shuffled() -> Self {
        let mut deck = Self::new();
        deck.shuffle(&mut rand::thread_rng());
        deck
    }

    /// Reproducible shuffle for a given seed
    pub fn seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::new();
        deck.shuffle(&mut rng);
        deck
    }

    /// Stacked deck, dealt in the given order. Used for replays.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(*card) {
                return Err(Error::DuplicateCard(card.to_code()));
            }
        }
        Ok(Self { cards, next: 0 })
    }

    /// Permutes the undealt cards only.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards[self.next..].shuffle(rng);
    }

    pub fn draw(&mut self) -> Result<Card> {
        let card = *self.cards.get(self.next).ok_or(Error::EmptyDeck)?;
        self.next += 1;
        log::debug!("drew {card} ({} left)", self.remaining());
        Ok(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Undealt cards in draw order
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.next..]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
