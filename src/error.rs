//! Errors reported at the boundary of the predictor.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Input that doesn't name one of Rock, Paper or Scissors.
    #[error("invalid move '{0}' (expected one of R, P, S)")]
    InvalidMove(String),

    /// No opponent move was supplied after the opening round.
    #[error("missing opponent move for round {round}")]
    MissingMove { round: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
