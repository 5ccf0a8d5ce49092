use super::*;
use crate::outcome::{OutcomeReason, Winner};
use crate::player::HandSlot;

/// Deck dealt in order: human, human, dealer, dealer, then hits.
fn stacked(codes: &[&str]) -> Deck {
    Deck::from_cards(codes.iter().map(|code| Card::from_code(code).unwrap()).collect()).unwrap()
}

fn start(codes: &[&str]) -> Round {
    Round::start(stacked(codes), GameRules::default()).unwrap()
}

#[test]
fn test_start_deals_two_cards_each() {
    let round = Round::start(Deck::seeded(3), GameRules::default()).unwrap();
    assert_eq!(round.human().hand.len(), 2);
    assert_eq!(round.dealer().hand.len(), 2);
    assert_eq!(round.deck().remaining(), 48);
}

#[test]
fn test_start_deal_order() {
    let round = start(&["H2", "H3", "S4", "S5"]);
    assert_eq!(round.human().hand.score(), 5);
    assert_eq!(round.dealer().hand.score(), 9);
    assert_eq!(round.phase(), GamePhase::HumanTurn);
}

#[test]
fn test_dealer_initial_blackjack_settles_immediately() {
    let mut round = start(&["HA", "HQ", "SA", "SK"]);
    assert_eq!(round.phase(), GamePhase::Settled);
    assert!(round.dealer().initial_blackjack);
    assert!(round.human().initial_blackjack);
    assert_eq!(round.human_hit(), Err(Error::WrongPhase("a settled round")));

    let outcome = round.outcome().unwrap();
    assert_eq!(outcome.winner, Winner::Dealer);
    assert_eq!(outcome.reason, OutcomeReason::DealerInitialBlackjack);
}

#[test]
fn test_human_initial_blackjack() {
    let round = start(&["HA", "HQ", "S9", "S7"]);
    assert_eq!(round.phase(), GamePhase::Settled);
    assert_eq!(round.outcome().unwrap().winner, Winner::Human);
}

#[test]
fn test_human_busts_and_dealer_never_plays() {
    let mut round = start(&["HK", "H3", "SK", "S8", "CK", "C2"]);
    round.human_hit().unwrap();
    assert_eq!(round.human().best_hand_state(), HandState::Busted);
    assert_eq!(round.phase(), GamePhase::Settled);
    assert_eq!(round.play_dealer().unwrap_err(), Error::WrongPhase("a settled round"));
    assert_eq!(round.dealer().hand.len(), 2);

    let outcome = round.outcome().unwrap();
    assert_eq!(outcome.winner, Winner::Dealer);
    assert_eq!(outcome.reason, OutcomeReason::HumanBusted);
}

#[test]
fn test_human_stays_dealer_busts() {
    let mut round = start(&["HK", "HQ", "SK", "S4", "CQ"]);
    round.human_stay().unwrap();
    assert_eq!(round.phase(), GamePhase::DealerTurn);
    assert_eq!(round.human_stay(), Err(Error::WrongPhase("the dealer turn")));

    let actions = round.play_dealer().unwrap().to_vec();
    assert_eq!(actions.last(), Some(&DealerAction::Bust(HandSlot::Primary)));
    assert_eq!(round.dealer().hand.score(), 24);

    let outcome = round.outcome().unwrap();
    assert_eq!(outcome.winner, Winner::Human);
    assert_eq!(outcome.reason, OutcomeReason::DealerBusted);
    assert_eq!(outcome.message(), "You Win!");
}

#[test]
fn test_dealer_wins_higher_score() {
    let mut round = start(&["HK", "H8", "SK", "S9"]);
    assert_eq!(round.outcome(), Err(Error::WrongPhase("the human turn")));
    round.human_stay().unwrap();
    round.play_dealer().unwrap();
    assert_eq!(round.dealer_actions().len(), 1);
    assert_eq!(round.outcome().unwrap().winner, Winner::Dealer);
}

#[test]
fn test_human_split_plays_both_hands() {
    // human 8,8 splits: first hand gets C3, second gets D10
    let mut round = start(&["H8", "S8", "SK", "S9", "C3", "D10", "CK", "C5"]);
    assert!(round.can_human_split());
    round.human_split().unwrap();
    assert!(!round.can_human_split());
    assert_eq!(round.human().current_slot(), HandSlot::Primary);

    // 11 + K = 21 on the first hand, then stay
    round.human_hit().unwrap();
    round.human_stay().unwrap();
    assert_eq!(round.phase(), GamePhase::HumanTurn);
    assert_eq!(round.human().current_slot(), HandSlot::Split);

    // 18 + 5 busts the second hand, which ends the human turn
    round.human_hit().unwrap();
    assert_eq!(round.phase(), GamePhase::DealerTurn);
    assert_eq!(round.human().best_hand_state(), HandState::Safe);
    assert_eq!(round.human().best_hand_score(), 21);

    round.play_dealer().unwrap();
    let outcome = round.outcome().unwrap();
    assert_eq!(outcome.winner, Winner::Human);
    assert_eq!(outcome.reason, OutcomeReason::HumanHigherScore);
}

#[test]
fn test_human_split_not_allowed_by_rules() {
    let rules = GameRules {
        allow_split: false,
        ..GameRules::default()
    };
    let mut round = Round::start(stacked(&["H8", "S8", "SK", "S9", "C3", "D10"]), rules).unwrap();
    assert!(!round.can_human_split());
    assert_eq!(round.human_split(), Err(Error::SplitNotAllowed));
    assert!(!round.human().is_split());
}

#[test]
fn test_human_split_requires_pair() {
    let mut round = start(&["H8", "S9", "SK", "S9", "C3", "D10"]);
    assert_eq!(round.human_split(), Err(Error::CannotSplit));
    assert_eq!(round.deck().remaining(), 2);
}

#[test]
fn test_dealer_splits_eights() {
    // human stays on 19; dealer 8,8 splits, first hand K (18), second 2 then 9 (19)
    let mut round = start(&["HK", "H9", "C8", "S8", "DK", "D2", "D9"]);
    round.human_stay().unwrap();
    let actions = round.play_dealer().unwrap().to_vec();
    assert_eq!(actions[0], DealerAction::Split);
    assert!(round.dealer().is_split());
    assert_eq!(round.dealer().best_hand_score(), 19);

    let outcome = round.outcome().unwrap();
    assert_eq!(outcome.winner, Winner::Dealer);
    assert_eq!(outcome.reason, OutcomeReason::DealerHigherOrEqualScore);
}

#[test]
fn test_render_dealer_hidden_during_human_turn() {
    let mut round = start(&["HK", "H9", "C8", "S7"]);
    assert_eq!(round.render_dealer(), "Dealer's Hand: 8 of Clubs, [FACE DOWN]");
    assert_eq!(round.render_human(), "Your Hand: King of Hearts, 9 of Hearts");
    round.human_stay().unwrap();
    assert_eq!(round.render_dealer(), "Dealer's Hand: 8 of Clubs, 7 of Spades");
}

#[test]
fn test_render_dealer_revealed_in_debug() {
    let round = Round::start(stacked(&["HK", "H9", "C8", "S7"]), GameRules::debug()).unwrap();
    assert_eq!(round.render_dealer(), "Dealer's Hand: 8 of Clubs, 7 of Spades");
}

#[test]
fn test_seeded_rounds_are_reproducible() {
    let a = Round::start(Deck::seeded(99), GameRules::default()).unwrap();
    let b = Round::start(Deck::seeded(99), GameRules::default()).unwrap();
    assert_eq!(a.human().hand, b.human().hand);
    assert_eq!(a.dealer().hand, b.dealer().hand);
}
