use crate::error::{Error, Result};
use crate::{HandState, Player};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Human,
    Dealer,
}

/// Which rule decided the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeReason {
    DealerInitialBlackjack,
    HumanInitialBlackjack,
    DealerBlackjack,
    HumanBlackjack,
    HumanBusted,
    DealerBusted,
    HumanHigherScore,
    /// Ties go to the dealer
    DealerHigherOrEqualScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: Winner,
    pub reason: OutcomeReason,
}

impl RoundOutcome {
    fn new(winner: Winner, reason: OutcomeReason) -> Self {
        Self { winner, reason }
    }

    pub fn message(&self) -> &'static str {
        match (self.reason, self.winner) {
            (OutcomeReason::DealerInitialBlackjack, _) => {
                "The dealer gets an initial blackjack and automatically wins!"
            }
            (OutcomeReason::HumanInitialBlackjack, _) => "You get an initial blackjack and win!",
            (_, Winner::Human) => "You Win!",
            (_, Winner::Dealer) => "The Dealer Wins!",
        }
    }
}

/// Decide the round. Rules are checked in order and the first match wins:
/// initial blackjacks (dealer first), post-play blackjacks (dealer first),
/// human bust, then scores with ties going to the dealer.
///
/// Both players busted cannot happen in a correctly driven round because the
/// dealer never plays against a busted human; it is reported as
/// [`Error::BothBusted`].
pub fn determine_winner(human: &Player, dealer: &Player) -> Result<RoundOutcome> {
    use OutcomeReason::*;

    if dealer.initial_blackjack {
        return Ok(RoundOutcome::new(Winner::Dealer, DealerInitialBlackjack));
    }
    if human.initial_blackjack {
        return Ok(RoundOutcome::new(Winner::Human, HumanInitialBlackjack));
    }

    let human_state = human.best_hand_state();
    let dealer_state = dealer.best_hand_state();

    let outcome = match (human_state, dealer_state) {
        (_, HandState::Blackjack) => RoundOutcome::new(Winner::Dealer, DealerBlackjack),
        (HandState::Blackjack, _) => RoundOutcome::new(Winner::Human, HumanBlackjack),
        (HandState::Busted, HandState::Safe) => RoundOutcome::new(Winner::Dealer, HumanBusted),
        (HandState::Safe, HandState::Busted) => RoundOutcome::new(Winner::Human, DealerBusted),
        (HandState::Safe, HandState::Safe) => {
            if human.best_hand_score() > dealer.best_hand_score() {
                RoundOutcome::new(Winner::Human, HumanHigherScore)
            } else {
                RoundOutcome::new(Winner::Dealer, DealerHigherOrEqualScore)
            }
        }
        (HandState::Busted, HandState::Busted) => return Err(Error::BothBusted),
    };

    log::debug!(
        "human {human_state} {} vs dealer {dealer_state} {}: {outcome:?}",
        human.best_hand_score(),
        dealer.best_hand_score()
    );
    Ok(outcome)
}
