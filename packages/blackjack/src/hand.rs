use crate::{Card, Deck, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandState {
    Safe,
    Blackjack,
    Busted,
}

impl HandState {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandState::Safe => "safe",
            HandState::Blackjack => "blackjack",
            HandState::Busted => "busted",
        }
    }
}

impl fmt::Display for HandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve aces for a set of cards.
///
/// Every ace starts at 11 and is demoted to 1, one at a time, while the total
/// is over 21. Returns the total and how many aces are still worth 11.
fn resolve_aces(cards: &[Card]) -> (u16, u16) {
    let mut total: u16 = 0;
    let mut aces_at_eleven: u16 = 0;

    for card in cards {
        if card.is_ace() {
            aces_at_eleven += 1;
            total += 11;
        } else {
            total += u16::from(card.base_value());
        }
    }

    while total > 21 && aces_at_eleven > 0 {
        total -= 10;
        aces_at_eleven -= 1;
    }

    (total, aces_at_eleven)
}

/// Calculate the value of a blackjack hand
pub fn calculate_hand_value(cards: &[Card]) -> u16 {
    resolve_aces(cards).0
}

/// Check if a hand is soft (has an ace counted as 11)
pub fn has_ace_valued_eleven(cards: &[Card]) -> bool {
    resolve_aces(cards).1 > 0
}

/// Check if a hand is busted
pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > 21
}

/// Check if a hand is blackjack (21 with 2 cards)
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_hand_value(cards) == 21
}

/// Check if two cards can be split (same rank)
pub fn can_split_cards(card1: &Card, card2: &Card) -> bool {
    card1.rank == card2.rank
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn score(&self) -> u16 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        has_ace_valued_eleven(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn state(&self) -> HandState {
        if self.is_blackjack() {
            HandState::Blackjack
        } else if self.is_busted() {
            HandState::Busted
        } else {
            HandState::Safe
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Draw one card from the deck into this hand.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card> {
        let card = deck.draw()?;
        self.add_card(card);
        Ok(card)
    }

    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && can_split_cards(&self.cards[0], &self.cards[1])
    }

    pub fn first_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
