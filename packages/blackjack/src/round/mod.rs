//! A single round of play between one human and the dealer.
//!
//! `Round` owns everything a round touches (deck, both players, rules) so no
//! state outlives it. Callers drive it through the phases in order:
//! `start`, then human actions until the human stays or busts, then
//! `play_dealer`, then `outcome`.

use crate::dealer::{play_dealer_turn, DealerAction};
use crate::error::{Error, Result};
use crate::outcome::{determine_winner, RoundOutcome};
use crate::player::Role;
use crate::render::render_player;
use crate::{Card, Deck, GameRules, HandState, Player};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    HumanTurn,
    DealerTurn,
    Settled,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::HumanTurn => "the human turn",
            GamePhase::DealerTurn => "the dealer turn",
            GamePhase::Settled => "a settled round",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    human: Player,
    dealer: Player,
    rules: GameRules,
    phase: GamePhase,
    dealer_actions: Vec<DealerAction>,
}

impl Round {
    /// Deal two cards to the human, then two to the dealer. A blackjack on
    /// either opening hand settles the round immediately.
    pub fn start(mut deck: Deck, rules: GameRules) -> Result<Self> {
        let mut human = Player::deal(Role::Human, &mut deck)?;
        let mut dealer = Player::deal(Role::Dealer, &mut deck)?;

        let dealer_blackjack = dealer.mark_initial_blackjack();
        let human_blackjack = human.mark_initial_blackjack();
        let phase = if dealer_blackjack || human_blackjack {
            log::info!(
                "initial blackjack (human: {human_blackjack}, dealer: {dealer_blackjack})"
            );
            GamePhase::Settled
        } else {
            GamePhase::HumanTurn
        };

        Ok(Self {
            deck,
            human,
            dealer,
            rules,
            phase,
            dealer_actions: Vec::new(),
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn dealer(&self) -> &Player {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// What the dealer did, empty until `play_dealer` has run
    pub fn dealer_actions(&self) -> &[DealerAction] {
        &self.dealer_actions
    }

    fn require(&self, phase: GamePhase) -> Result<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(Error::WrongPhase(self.phase.as_str()))
        }
    }

    pub fn can_human_split(&self) -> bool {
        self.phase == GamePhase::HumanTurn && self.rules.allow_split && self.human.can_split()
    }

    /// Hit the hand the human is playing. Busting that hand ends it.
    pub fn human_hit(&mut self) -> Result<Card> {
        self.require(GamePhase::HumanTurn)?;
        let card = self.human.hit(&mut self.deck)?;
        if self.human.current_hand().is_busted() {
            log::debug!("human busts {:?}", self.human.current_slot());
            self.finish_human_hand();
        }
        Ok(card)
    }

    pub fn human_split(&mut self) -> Result<()> {
        self.require(GamePhase::HumanTurn)?;
        if !self.rules.allow_split {
            return Err(Error::SplitNotAllowed);
        }
        self.human.split(&mut self.deck)
    }

    pub fn human_stay(&mut self) -> Result<()> {
        self.require(GamePhase::HumanTurn)?;
        self.finish_human_hand();
        Ok(())
    }

    fn finish_human_hand(&mut self) {
        if self.human.advance_to_split_hand() {
            return;
        }
        // the dealer never plays against a busted human
        self.phase = if self.human.best_hand_state() == HandState::Busted {
            GamePhase::Settled
        } else {
            GamePhase::DealerTurn
        };
    }

    pub fn play_dealer(&mut self) -> Result<&[DealerAction]> {
        self.require(GamePhase::DealerTurn)?;
        self.dealer_actions = play_dealer_turn(
            &mut self.dealer,
            &mut self.deck,
            self.human.best_hand_state(),
            &self.rules,
        )?;
        self.phase = GamePhase::Settled;
        Ok(&self.dealer_actions)
    }

    pub fn outcome(&self) -> Result<RoundOutcome> {
        self.require(GamePhase::Settled)?;
        determine_winner(&self.human, &self.dealer)
    }

    pub fn render_human(&self) -> String {
        render_player(&self.human, true, self.rules.card_style)
    }

    /// The dealer's hole cards stay hidden while the human is playing unless
    /// the rules reveal them.
    pub fn render_dealer(&self) -> String {
        let reveal = self.rules.reveal_dealer || self.phase != GamePhase::HumanTurn;
        render_player(&self.dealer, reveal, self.rules.card_style)
    }
}

#[cfg(test)]
mod tests;
