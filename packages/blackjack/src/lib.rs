mod card;
mod deck;
mod error;
mod hand;
mod rules;
pub mod dealer;
pub mod outcome;
pub mod player;
pub mod render;
pub mod round;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use error::{Error, Result};
pub use hand::{Hand, HandState, calculate_hand_value, has_ace_valued_eleven, is_busted, is_blackjack, can_split_cards};
pub use rules::{CardStyle, GameRules};
pub use player::{HandSlot, Player, Role};
pub use dealer::{check_dealer_should_hit, play_dealer_turn, DealerAction, DealerPhase, DealerTurn};
pub use outcome::{determine_winner, OutcomeReason, RoundOutcome, Winner};
pub use round::{GamePhase, Round};

/// Full 52-card deck in a random order
pub fn new_shuffled_deck() -> Deck {
    Deck::new_shuffled()
}

/// Deal a two-card hand to a new player.
pub fn deal_initial_hand(role: Role, deck: &mut Deck) -> Result<Player> {
    Player::deal(role, deck)
}
