//! Fixed dealer policy.
//!
//! The dealer splits any pair scoring at most `dealer_split_max_score`, then
//! plays each hand in turn: hit on 16 or less, hit a soft 17, stay otherwise.
//! Nothing is drawn once the opponent has busted.

use crate::error::Result;
use crate::player::HandSlot;
use crate::{Card, Deck, GameRules, Hand, HandState, Player};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerPhase {
    ActingFirstHand,
    ActingSplitHand,
    Done,
}

/// One step of the dealer's turn, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerAction {
    Split,
    Hit { slot: HandSlot, card: Card },
    Stay(HandSlot),
    Bust(HandSlot),
}

pub fn should_hit(hand: &Hand, opponent_state: HandState, rules: &GameRules) -> bool {
    if opponent_state == HandState::Busted {
        return false;
    }
    let score = hand.score();
    score <= 16 || (score == 17 && rules.dealer_hits_soft_17 && hand.is_soft())
}

/// Hit/stay decision for the hand the dealer is currently playing.
pub fn check_dealer_should_hit(dealer: &Player, opponent_state: HandState, rules: &GameRules) -> bool {
    should_hit(dealer.current_hand(), opponent_state, rules)
}

pub fn should_split(dealer: &Player, rules: &GameRules) -> bool {
    rules.allow_split && dealer.can_split() && dealer.hand.score() <= rules.dealer_split_max_score
}

/// Dealer turn as an explicit state machine. Each `step` performs at most
/// one action; `None` means every hand has stayed or busted.
#[derive(Debug, Clone)]
pub struct DealerTurn {
    phase: DealerPhase,
    opponent_state: HandState,
    split_checked: bool,
}

impl DealerTurn {
    pub fn new(opponent_state: HandState) -> Self {
        Self {
            phase: DealerPhase::ActingFirstHand,
            opponent_state,
            split_checked: false,
        }
    }

    pub fn phase(&self) -> DealerPhase {
        self.phase
    }

    pub fn step(
        &mut self,
        dealer: &mut Player,
        deck: &mut Deck,
        rules: &GameRules,
    ) -> Result<Option<DealerAction>> {
        if self.phase == DealerPhase::Done {
            return Ok(None);
        }

        if !self.split_checked {
            self.split_checked = true;
            if should_split(dealer, rules) {
                dealer.split(deck)?;
                log::debug!("dealer splits");
                return Ok(Some(DealerAction::Split));
            }
        }

        let slot = dealer.current_slot();
        if check_dealer_should_hit(dealer, self.opponent_state, rules) {
            let card = dealer.hit(deck)?;
            log::debug!("dealer hits {slot:?}: {card}");
            return Ok(Some(DealerAction::Hit { slot, card }));
        }

        let action = if dealer.current_hand().is_busted() {
            DealerAction::Bust(slot)
        } else {
            DealerAction::Stay(slot)
        };
        log::debug!("dealer resolves {slot:?} at {}: {action:?}", dealer.current_hand().score());

        self.phase = match self.phase {
            DealerPhase::ActingFirstHand if dealer.advance_to_split_hand() => {
                DealerPhase::ActingSplitHand
            }
            _ => DealerPhase::Done,
        };
        Ok(Some(action))
    }
}

/// Run the dealer's whole turn and return what it did.
pub fn play_dealer_turn(
    dealer: &mut Player,
    deck: &mut Deck,
    opponent_state: HandState,
    rules: &GameRules,
) -> Result<Vec<DealerAction>> {
    let mut turn = DealerTurn::new(opponent_state);
    let mut actions = Vec::new();
    while let Some(action) = turn.step(dealer, deck, rules)? {
        actions.push(action);
    }
    Ok(actions)
}
