//! Strategies for predicting an opponent's next move.

pub mod frequency;
pub mod pattern;
pub mod markov;
pub mod trend;
pub mod ensemble;

pub use frequency::*;
pub use pattern::*;
pub use markov::*;
pub use trend::*;
pub use ensemble::*;

use log::debug;

use crate::error::{ Error, Result };
use crate::history::MoveHistory;
use crate::moves::Move;


/// Interface to a strategy that guesses the opponent's next move from their
/// history. A strategy may abstain by returning [None].
pub trait Strategy {
    fn name(&self) -> &'static str;
    fn predict(&self, history: &MoveHistory) -> Option<Move>;
}

/// A player for a single match.
///
/// Owns the opponent's [MoveHistory] for the lifetime of the match. Use a
/// separate [Predictor] for every independent match.
pub struct Predictor {
    ensemble: Ensemble,
    history: MoveHistory,
    /// Number of completed calls to [Predictor::decide].
    round: usize,
}
impl Predictor {
    pub fn new() -> Self {
        Self::from_config(EnsembleConfig::default())
    }

    pub fn from_config(cfg: EnsembleConfig) -> Self {
        Self {
            ensemble: cfg.build(),
            history: MoveHistory::new(),
            round: 0,
        }
    }

    /// Start from some previously-observed history.
    pub fn with_history(mut self, history: MoveHistory) -> Self {
        self.history = history;
        self
    }

    pub fn history(&self) -> &MoveHistory { &self.history }

    /// Returns the number of rounds played so far.
    pub fn round(&self) -> usize { self.round }

    /// Every strategy's prediction of the opponent's next move.
    pub fn ballot(&self) -> Ballot {
        self.ensemble.ballot(&self.history)
    }

    /// The combined prediction of the opponent's next move.
    pub fn prediction(&self) -> Option<Move> {
        self.ensemble.predict(&self.history)
    }

    /// Record the opponent's previous move and choose a move for this round.
    ///
    /// 'previous' may only be [None] in the first round, in which case the
    /// opening move is played.
    pub fn decide(&mut self, previous: Option<Move>) -> Result<Move> {
        let last = match previous {
            Some(m) => m,
            None if self.round == 0 => {
                self.round += 1;
                debug!("round 1: opening with {}", self.ensemble.opening());
                return Ok(self.ensemble.opening());
            },
            None => return Err(Error::MissingMove { round: self.round + 1 }),
        };
        self.history.push(last);
        self.round += 1;

        let predicted = self.prediction().unwrap_or(last);
        let res = predicted.counter();
        debug!("round {}: history={} predicted={} playing={}",
            self.round, self.history, predicted, res);
        Ok(res)
    }
}

impl Default for Predictor {
    fn default() -> Self { Self::new() }
}


#[cfg(test)]
mod test {
    use super::*;
    use Move::*;

    #[test]
    fn opening_move() {
        let mut p = Predictor::new();
        assert_eq!(p.decide(None), Ok(Rock));
        assert!(p.history().is_empty());
        assert_eq!(p.round(), 1);
    }

    #[test]
    fn opening_ignores_seeded_history() {
        let seeded: MoveHistory = [Paper, Paper, Paper].into_iter().collect();
        let mut p = Predictor::new().with_history(seeded);
        assert_eq!(p.decide(None), Ok(Rock));
        assert_eq!(p.history().len(), 3);
    }

    #[test]
    fn missing_move_after_opening() {
        let mut p = Predictor::new();
        p.decide(None).unwrap();
        p.decide(Some(Rock)).unwrap();
        assert_eq!(p.decide(None), Err(Error::MissingMove { round: 3 }));
        // Nothing was recorded.
        assert_eq!(p.history().len(), 1);
        assert_eq!(p.round(), 2);
    }

    #[test]
    fn second_round_counters_last_move() {
        let mut p = Predictor::new();
        assert_eq!(p.decide(None), Ok(Rock));
        assert_eq!(p.decide(Some(Rock)), Ok(Paper));
        assert_eq!(p.history().iter().collect::<Vec<_>>(), vec![Rock]);
    }

    #[test]
    fn first_round_may_carry_a_move() {
        let mut p = Predictor::new();
        assert_eq!(p.decide(Some(Scissors)), Ok(Rock));
        assert_eq!(p.history().len(), 1);
    }

    #[test]
    fn repeated_moves_append_twice() {
        let mut p = Predictor::new();
        p.decide(None).unwrap();
        p.decide(Some(Paper)).unwrap();
        p.decide(Some(Paper)).unwrap();
        assert_eq!(p.history().len(), 2);
        assert_eq!(p.round(), 3);
    }

    #[test]
    fn custom_opening() {
        let cfg = EnsembleConfig { opening: Scissors, ..Default::default() };
        let mut p = Predictor::from_config(cfg);
        assert_eq!(p.decide(None), Ok(Scissors));
    }
}
