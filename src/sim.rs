//! Playing a [Predictor] against an [Opponent] and collecting statistics.

use log::{ debug, info };

use crate::error::Result;
use crate::moves::*;
use crate::opponent::Opponent;
use crate::predictor::Predictor;

/// Container for recording the results of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
}
impl MatchStats {
    pub fn new() -> Self { Self::default() }

    /// Record the result of a single round.
    pub fn update(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Return the total number of rounds.
    pub fn rounds(&self) -> usize { self.wins + self.losses + self.ties }

    /// Return the fraction of decided (non-tied) rounds that were won.
    pub fn win_rate(&self) -> f64 {
        let decided = self.wins + self.losses;
        if decided == 0 {
            return 0.0;
        }
        self.wins as f64 / decided as f64
    }
}

/// A match between a [Predictor] and some [Opponent].
pub struct Match<O: Opponent> {
    predictor: Predictor,
    opponent: O,
    stats: MatchStats,
    /// Moves from the previous round: (ours, theirs)
    previous: Option<(Move, Move)>,
}
impl <O: Opponent> Match<O> {
    pub fn new(predictor: Predictor, opponent: O) -> Self {
        Self { predictor, opponent, stats: MatchStats::new(), previous: None }
    }

    pub fn stats(&self) -> &MatchStats { &self.stats }
    pub fn predictor(&self) -> &Predictor { &self.predictor }

    /// Play a single round, feeding each side the other's previous move.
    pub fn step(&mut self) -> Result<(Move, Move)> {
        let ours = self.predictor.decide(self.previous.map(|(_, t)| t))?;
        let theirs = self.opponent.play(self.previous.map(|(o, _)| o));
        let outcome = ours.versus(theirs);
        debug!("{} vs {}: {:?}", ours, theirs, outcome);
        self.stats.update(outcome);
        self.previous = Some((ours, theirs));
        Ok((ours, theirs))
    }

    /// Play some number of rounds and return the accumulated statistics.
    pub fn play(mut self, rounds: usize) -> Result<MatchStats> {
        for _ in 0..rounds {
            self.step()?;
        }
        info!("{:>16}: {} wins, {} losses, {} ties ({:.2}% win rate)",
            self.opponent.name(),
            self.stats.wins, self.stats.losses, self.stats.ties,
            self.stats.win_rate() * 100.0
        );
        Ok(self.stats)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::opponent::*;
    use Move::*;

    #[test]
    fn stats() {
        let mut s = MatchStats::new();
        assert_eq!(s.win_rate(), 0.0);
        s.update(Outcome::Win);
        s.update(Outcome::Win);
        s.update(Outcome::Win);
        s.update(Outcome::Loss);
        s.update(Outcome::Tie);
        assert_eq!(s.rounds(), 5);
        assert_eq!(s.win_rate(), 0.75);
    }

    #[test]
    fn step_feeds_previous_moves() {
        let mut m = Match::new(Predictor::new(), Constant(Scissors));
        assert_eq!(m.step().unwrap(), (Rock, Scissors));
        // Frequency falls back to the last move, Scissors.
        assert_eq!(m.step().unwrap(), (Rock, Scissors));
        assert_eq!(m.predictor().history().len(), 1);
        assert_eq!(m.stats().wins, 2);
    }

    #[test]
    fn beats_constant_opponent() {
        let stats = Match::new(Predictor::new(), Constant(Paper)).play(100).unwrap();
        assert_eq!(stats.rounds(), 100);
        // Only the opening round is lost.
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.wins, 99);
    }

    #[test]
    fn beats_cycle_opponent() {
        let opp = Cycle::new(&[Rock, Rock, Paper, Paper, Scissors]);
        let stats = Match::new(Predictor::new(), opp).play(1000).unwrap();
        assert!(stats.win_rate() > 0.6, "{:?}", stats);
    }
}
