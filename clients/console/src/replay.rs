//! Replay files: whitespace-separated card codes that stack the deck in
//! deal order, followed by the human's commands (`H`, `S`, `D`).
//!
//! ```text
//! SK HA HQ CA
//! H8 S8 C2 D3 H S
//! ```

use crate::input::{parse_player_command, PlayerCommand};
use blackjack::{Card, Deck};
use std::path::Path;

/// Two cards each for the human and the dealer
const OPENING_CARDS: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct Replay {
    pub cards: Vec<Card>,
    pub commands: Vec<PlayerCommand>,
    /// Set when any token was malformed or out of place, or there are too
    /// few cards for the opening deal. The round must not be played.
    pub input_error: bool,
}

impl Replay {
    pub fn parse(contents: &str) -> Self {
        let mut replay = Replay::default();

        for token in contents.split_whitespace() {
            if let Some(command) = parse_player_command(token) {
                replay.commands.push(command);
            } else if let Ok(card) = Card::from_code(token) {
                if !replay.commands.is_empty() {
                    log::warn!("card {token} appears after player commands");
                    replay.input_error = true;
                }
                replay.cards.push(card);
            } else {
                log::warn!("invalid replay token: {token:?}");
                replay.input_error = true;
            }
        }

        if replay.cards.len() < OPENING_CARDS {
            log::warn!("replay has {} cards, fewer than the opening deal", replay.cards.len());
            replay.input_error = true;
        }

        replay
    }

    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    /// Deck stacked with the replay's cards. `None` on a flagged input error
    /// or a repeated card.
    pub fn deck(&self) -> Option<Deck> {
        if self.input_error {
            return None;
        }
        match Deck::from_cards(self.cards.clone()) {
            Ok(deck) => Some(deck),
            Err(e) => {
                log::warn!("replay deck rejected: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cards_only() {
        let replay = Replay::parse("SK HA HQ CA");
        assert!(!replay.input_error);
        assert!(replay.commands.is_empty());
        let codes: Vec<String> = replay.cards.iter().map(Card::to_code).collect();
        assert_eq!(codes, ["SK", "HA", "HQ", "CA"]);
    }

    #[test]
    fn test_parse_cards_then_commands() {
        let replay = Replay::parse("H8 S8 C2 D3\nd h s\n");
        assert!(!replay.input_error);
        assert_eq!(replay.cards.len(), 4);
        assert_eq!(
            replay.commands,
            vec![PlayerCommand::Split, PlayerCommand::Hit, PlayerCommand::Stay]
        );
        assert_eq!(replay.deck().unwrap().remaining(), 4);
    }

    #[test]
    fn test_malformed_token_sets_error() {
        let replay = Replay::parse("SK HA C11 CA");
        assert!(replay.input_error);
        assert!(replay.deck().is_none());
    }

    #[test]
    fn test_card_after_command_sets_error() {
        let replay = Replay::parse("SK HA H CA");
        assert!(replay.input_error);
    }

    #[test]
    fn test_too_few_cards_sets_error() {
        let replay = Replay::parse("HK H5 SK");
        assert!(replay.input_error);
        assert!(replay.deck().is_none());

        assert!(Replay::parse("").input_error);
        assert!(Replay::parse("H S").input_error);
    }

    #[test]
    fn test_duplicate_card_rejects_deck() {
        let replay = Replay::parse("SK SK HA CA");
        assert!(!replay.input_error);
        assert!(replay.deck().is_none());
    }
}
