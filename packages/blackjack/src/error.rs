use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cannot draw from an empty deck")]
    EmptyDeck,
    #[error("Player has already split")]
    AlreadySplit,
    #[error("Hand must hold exactly two cards of the same rank to split")]
    CannotSplit,
    #[error("Splitting is disabled by the table rules")]
    SplitNotAllowed,
    #[error("Duplicate card in deck: {0}")]
    DuplicateCard(String),
    #[error("Invalid card code: {0:?}")]
    InvalidCardCode(String),
    #[error("Action not allowed during {0}")]
    WrongPhase(&'static str),
    #[error("Both players busted; the dealer should never have played")]
    BothBusted,
}
