use crate::error::{Error, Result};
use crate::{Card, Deck, Hand, HandState};
use serde::{Deserialize, Serialize};

/// Which side of the table a player sits on. Decides the turn policy
/// (interactive or fixed dealer rule) and how the hand is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Human,
    Dealer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandSlot {
    Primary,
    Split,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub role: Role,
    pub hand: Hand,
    split_hand: Option<Hand>,
    current: HandSlot,
    pub initial_blackjack: bool,
}

impl Player {
    /// Deal a fresh two-card hand from the deck.
    pub fn deal(role: Role, deck: &mut Deck) -> Result<Self> {
        if deck.remaining() < 2 {
            return Err(Error::EmptyDeck);
        }
        let mut hand = Hand::new();
        hand.hit(deck)?;
        hand.hit(deck)?;
        Ok(Self::with_hand(role, hand))
    }

    pub fn with_hand(role: Role, hand: Hand) -> Self {
        Self {
            role,
            hand,
            split_hand: None,
            current: HandSlot::Primary,
            initial_blackjack: false,
        }
    }

    /// Both hands already dealt, as if the player had split.
    #[cfg(test)]
    pub(crate) fn with_split_hands(role: Role, hand: Hand, split_hand: Hand) -> Self {
        Self {
            split_hand: Some(split_hand),
            ..Self::with_hand(role, hand)
        }
    }

    pub fn split_hand(&self) -> Option<&Hand> {
        self.split_hand.as_ref()
    }

    pub fn is_split(&self) -> bool {
        self.split_hand.is_some()
    }

    pub fn current_slot(&self) -> HandSlot {
        self.current
    }

    pub fn hand_in(&self, slot: HandSlot) -> Option<&Hand> {
        match slot {
            HandSlot::Primary => Some(&self.hand),
            HandSlot::Split => self.split_hand.as_ref(),
        }
    }

    pub fn current_hand(&self) -> &Hand {
        match (&self.current, &self.split_hand) {
            (HandSlot::Split, Some(split)) => split,
            _ => &self.hand,
        }
    }

    fn current_hand_mut(&mut self) -> &mut Hand {
        match (&self.current, &mut self.split_hand) {
            (HandSlot::Split, Some(split)) => split,
            _ => &mut self.hand,
        }
    }

    /// Draw a card into the hand being played.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card> {
        self.current_hand_mut().hit(deck)
    }

    pub fn can_split(&self) -> bool {
        !self.is_split() && self.hand.can_split()
    }

    /// Move the second card into a new split hand, then deal one card to
    /// each hand. Fails without touching the player or the deck.
    pub fn split(&mut self, deck: &mut Deck) -> Result<()> {
        if self.is_split() {
            return Err(Error::AlreadySplit);
        }
        if !self.hand.can_split() {
            return Err(Error::CannotSplit);
        }
        if deck.remaining() < 2 {
            return Err(Error::EmptyDeck);
        }

        let second_card = self.hand.cards.pop().ok_or(Error::CannotSplit)?;
        let mut split_hand = Hand::new();
        split_hand.add_card(second_card);

        self.hand.hit(deck)?;
        split_hand.hit(deck)?;
        self.split_hand = Some(split_hand);

        log::debug!("{:?} split into two hands", self.role);
        Ok(())
    }

    /// Switch play to the split hand. Returns false when there is none or
    /// it is already being played.
    pub fn advance_to_split_hand(&mut self) -> bool {
        if self.is_split() && self.current == HandSlot::Primary {
            self.current = HandSlot::Split;
            true
        } else {
            false
        }
    }

    fn hands(&self) -> impl Iterator<Item = &Hand> {
        std::iter::once(&self.hand).chain(self.split_hand.iter())
    }

    /// Aggregate state across all hands: any blackjack wins out, then any
    /// surviving hand, and only then busted.
    pub fn best_hand_state(&self) -> HandState {
        let states: Vec<HandState> = self.hands().map(Hand::state).collect();
        if states.contains(&HandState::Blackjack) {
            HandState::Blackjack
        } else if states.contains(&HandState::Safe) {
            HandState::Safe
        } else {
            HandState::Busted
        }
    }

    /// Score matching `best_hand_state`. Busted hands are ignored, and an
    /// all-busted player scores 0.
    pub fn best_hand_score(&self) -> u16 {
        match self.best_hand_state() {
            HandState::Blackjack => 21,
            HandState::Safe => self
                .hands()
                .filter(|hand| !hand.is_busted())
                .map(Hand::score)
                .max()
                .unwrap_or(0),
            HandState::Busted => 0,
        }
    }

    /// Record a blackjack on the opening two cards. Only meaningful before
    /// any action has been taken.
    pub fn mark_initial_blackjack(&mut self) -> bool {
        self.initial_blackjack = !self.is_split() && self.hand.is_blackjack();
        self.initial_blackjack
    }
}
